//! Ascon AEAD parameter sets.

// =============================================================================
// VARIANT SELECTION
// =============================================================================

/// Closed set of Ascon AEAD parameter sets.
///
/// The variant fixes the sponge rate, the per-block round count `b`, the key
/// length, and the initialization-vector header; nothing else in the
/// construction varies. The initialization/finalization round count `a` is 12
/// for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Ascon-128: 64-bit rate, 6 rounds per block, 128-bit key.
    Ascon128,
    /// Ascon-128a: 128-bit rate, 8 rounds per block, 128-bit key.
    Ascon128a,
    /// Ascon-80pq: 64-bit rate, 6 rounds per block, 160-bit key.
    Ascon80pq,
}

impl Variant {
    /// Sponge rate in bytes: the block size for absorption and duplexing.
    #[must_use]
    pub const fn rate(self) -> usize {
        match self {
            Self::Ascon128 | Self::Ascon80pq => 8,
            Self::Ascon128a => 16,
        }
    }

    /// Per-block round count `b`.
    #[must_use]
    pub const fn rounds_b(self) -> usize {
        match self {
            Self::Ascon128 | Self::Ascon80pq => 6,
            Self::Ascon128a => 8,
        }
    }

    /// Required key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Ascon128 | Self::Ascon128a => 16,
            Self::Ascon80pq => 20,
        }
    }

    /// First four bytes of the 40-byte initialization block:
    /// `(key bits, rate bits, a, b)`.
    pub(crate) const fn iv_header(self) -> [u8; 4] {
        match self {
            Self::Ascon128 => [0x80, 0x40, 0x0c, 0x06],
            Self::Ascon128a => [0x80, 0x80, 0x0c, 0x08],
            Self::Ascon80pq => [0xa0, 0x40, 0x0c, 0x06],
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::Variant;

    #[test]
    fn headers_encode_the_parameters() {
        for variant in [Variant::Ascon128, Variant::Ascon128a, Variant::Ascon80pq] {
            let [k_bits, rate_bits, a, b] = variant.iv_header();
            assert_eq!(usize::from(k_bits), variant.key_len() * 8);
            assert_eq!(usize::from(rate_bits), variant.rate() * 8);
            assert_eq!(a, 12);
            assert_eq!(usize::from(b), variant.rounds_b());
        }
    }
}

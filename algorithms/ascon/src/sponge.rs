//! Sponge/duplex state lifecycle.
//!
//! One [`Sponge`] is created per AEAD call and moves through
//! initialize → absorb → duplex → finalize, mutating its five-word state in
//! place. Words hold big-endian byte order: byte 0 of a block lands in the
//! high byte of word 0, matching the reference byte layout bit for bit.

use crate::permutation::{permute, FULL_ROUNDS};
use crate::types::{NONCE_SIZE, TAG_SIZE};
use crate::variant::Variant;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Number of 64-bit words in the sponge state.
const STATE_WORDS: usize = 5;

/// Initialization block length: header, key gap, key, nonce — always 40
/// bytes regardless of key length.
const IV_LEN: usize = 40;

// =============================================================================
// SPONGE STATE
// =============================================================================

/// The 320-bit duplex state plus the variant-derived block parameters.
pub(crate) struct Sponge {
    s: [u64; STATE_WORDS],
    rate: usize,
    rounds_b: usize,
}

impl Sponge {
    /// Initialize the state from key and nonce.
    ///
    /// Loads the 40-byte IV block, runs the full permutation, then XORs a
    /// zero-left-padded copy of the key back in (the key reappears
    /// right-aligned in the last words).
    pub fn new(key: &[u8], nonce: &[u8; NONCE_SIZE], variant: Variant) -> Self {
        debug_assert_eq!(key.len(), variant.key_len());
        let rate = variant.rate();

        let mut iv = [0u8; IV_LEN];
        iv[..4].copy_from_slice(&variant.iv_header());
        iv[IV_LEN - NONCE_SIZE - key.len()..IV_LEN - NONCE_SIZE].copy_from_slice(key);
        iv[IV_LEN - NONCE_SIZE..].copy_from_slice(nonce);

        let mut s = [0u64; STATE_WORDS];
        for (word, chunk) in s.iter_mut().zip(iv.chunks_exact(8)) {
            *word = load_word(chunk);
        }
        permute(&mut s, FULL_ROUNDS);

        let mut padded_key = [0u8; IV_LEN];
        padded_key[IV_LEN - key.len()..].copy_from_slice(key);
        for (word, chunk) in s.iter_mut().zip(padded_key.chunks_exact(8)) {
            *word ^= load_word(chunk);
        }

        Self {
            s,
            rate,
            rounds_b: variant.rounds_b(),
        }
    }

    /// Absorb associated data, then mark the phase transition.
    ///
    /// Empty associated data absorbs nothing, but the domain-separation bit
    /// in word 4 is flipped unconditionally exactly once.
    pub fn absorb(&mut self, associated_data: &[u8]) {
        if !associated_data.is_empty() {
            let padded = pad(associated_data, self.rate);
            for block in padded.chunks_exact(self.rate) {
                self.s[0] ^= load_word(&block[..8]);
                if self.rate == 16 {
                    self.s[1] ^= load_word(&block[8..16]);
                }
                permute(&mut self.s, self.rounds_b);
            }
        }
        self.s[4] ^= 1;
    }

    /// Duplex plaintext into ciphertext.
    ///
    /// Full blocks XOR into the rate words and emit them, then permute. The
    /// final (padded) block emits only the true trailing length and skips the
    /// permutation; the state after its XOR feeds straight into
    /// [`Self::finalize`].
    pub fn encrypt_blocks(&mut self, plaintext: &[u8]) -> Vec<u8> {
        let tail_len = plaintext.len() % self.rate;
        let padded = pad(plaintext, self.rate);
        let last = padded.len() - self.rate;
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for (offset, block) in padded.chunks_exact(self.rate).enumerate() {
            self.s[0] ^= load_word(&block[..8]);
            if self.rate == 16 {
                self.s[1] ^= load_word(&block[8..16]);
            }

            if offset * self.rate == last {
                let mut out = [0u8; 16];
                out[..8].copy_from_slice(&self.s[0].to_be_bytes());
                if self.rate == 16 {
                    out[8..].copy_from_slice(&self.s[1].to_be_bytes());
                }
                ciphertext.extend_from_slice(&out[..tail_len]);
            } else {
                ciphertext.extend_from_slice(&self.s[0].to_be_bytes());
                if self.rate == 16 {
                    ciphertext.extend_from_slice(&self.s[1].to_be_bytes());
                }
                permute(&mut self.s, self.rounds_b);
            }
        }
        ciphertext
    }

    /// Duplex ciphertext back into plaintext.
    ///
    /// Full blocks emit `state ^ ciphertext` and then *replace* the rate
    /// words with the received ciphertext, driving the state forward exactly
    /// as the encryptor's did. The final partial block emits only the known
    /// bytes and rebuilds the padded state word: received ciphertext in the
    /// known positions, the old state in the unknown ones, and the `0x80`
    /// marker at the pad position.
    pub fn decrypt_blocks(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        let tail_len = ciphertext.len() % self.rate;
        let mut padded = ciphertext.to_vec();
        padded.resize(ciphertext.len() + self.rate - tail_len, 0);
        let last = padded.len() - self.rate;
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for (offset, block) in padded.chunks_exact(self.rate).enumerate() {
            let c0 = load_word(&block[..8]);
            let c1 = if self.rate == 16 {
                load_word(&block[8..16])
            } else {
                0
            };

            if offset * self.rate == last {
                let mut out = [0u8; 16];
                out[..8].copy_from_slice(&(self.s[0] ^ c0).to_be_bytes());
                if self.rate == 16 {
                    out[8..].copy_from_slice(&(self.s[1] ^ c1).to_be_bytes());
                }
                plaintext.extend_from_slice(&out[..tail_len]);

                let tail_word = tail_len % 8;
                let padding_bit = 0x80_u64 << (8 * (8 - tail_word - 1));
                let mask = u64::MAX >> (8 * tail_word);
                if self.rate == 8 || tail_len < 8 {
                    self.s[0] = c0 ^ (self.s[0] & mask) ^ padding_bit;
                } else {
                    self.s[0] = c0;
                    self.s[1] = c1 ^ (self.s[1] & mask) ^ padding_bit;
                }
            } else {
                plaintext.extend_from_slice(&(self.s[0] ^ c0).to_be_bytes());
                self.s[0] = c0;
                if self.rate == 16 {
                    plaintext.extend_from_slice(&(self.s[1] ^ c1).to_be_bytes());
                    self.s[1] = c1;
                }
                permute(&mut self.s, self.rounds_b);
            }
        }
        plaintext
    }

    /// Finalize: fold the key into the capacity, permute, fold the key tail
    /// into the last two words, and read the tag out of them.
    pub fn finalize(mut self, key: &[u8]) -> [u8; TAG_SIZE] {
        let rate_words = self.rate / 8;
        self.s[rate_words] ^= load_word(&key[..8]);
        self.s[rate_words + 1] ^= load_word(&key[8..16]);
        // Empty for 16-byte keys; the trailing 4 bytes of a 20-byte key land
        // right-aligned in the low bits.
        self.s[rate_words + 2] ^= load_word(&key[16..]);

        permute(&mut self.s, FULL_ROUNDS);

        self.s[3] ^= load_word(&key[key.len() - 16..key.len() - 8]);
        self.s[4] ^= load_word(&key[key.len() - 8..]);

        let mut tag = [0u8; TAG_SIZE];
        tag[..8].copy_from_slice(&self.s[3].to_be_bytes());
        tag[8..].copy_from_slice(&self.s[4].to_be_bytes());
        tag
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Big-endian word load. Slices shorter than 8 bytes land right-aligned in
/// the low bytes; the empty slice loads zero.
fn load_word(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |word, &b| (word << 8) | u64::from(b))
}

/// Append the `0x80` pad marker and zero-fill to the next rate multiple.
/// Block-aligned input grows by one full block.
fn pad(data: &[u8], rate: usize) -> Vec<u8> {
    let mut padded = data.to_vec();
    padded.push(0x80);
    padded.resize(data.len() + rate - data.len() % rate, 0);
    padded
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{load_word, pad};

    #[test]
    fn load_word_is_big_endian() {
        assert_eq!(
            load_word(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]),
            0x1122_3344_5566_7788
        );
        assert_eq!(load_word(&[0xab, 0xcd]), 0xabcd);
        assert_eq!(load_word(&[]), 0);
    }

    #[test]
    fn pad_reaches_the_next_rate_multiple() {
        assert_eq!(pad(&[], 8), [0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(pad(&[1, 2, 3], 8), [1, 2, 3, 0x80, 0, 0, 0, 0]);
        // Block-aligned input grows by a whole block.
        let aligned = pad(&[7u8; 16], 16);
        assert_eq!(aligned.len(), 32);
        assert_eq!(aligned[16], 0x80);
        assert!(aligned[17..].iter().all(|&b| b == 0));
    }
}

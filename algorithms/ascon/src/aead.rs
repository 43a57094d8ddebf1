//! Public API layer: the two AEAD entry points.

use crate::sponge::Sponge;
use crate::types::{AuthenticationError, NONCE_SIZE, TAG_SIZE};
use crate::variant::Variant;
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// ENCRYPT
// =============================================================================

/// Encrypt and authenticate `plaintext`, binding `associated_data`.
///
/// Returns `ciphertext || tag`; the output is always exactly
/// [`TAG_SIZE`] bytes longer than the plaintext. The nonce must never repeat
/// under the same key — that invariant is the caller's to uphold.
///
/// # Panics
/// Panics if `key.len() != variant.key_len()`. A wrong key length is
/// programmer misuse, not a runtime data error.
///
/// # Example
/// ```rust
/// use ascon::Variant;
///
/// let key = [0x42u8; 16];
/// let nonce = [7u8; 16];
/// let sealed = ascon::encrypt(&key, &nonce, b"header", b"payload", Variant::Ascon128a);
/// assert_eq!(sealed.len(), b"payload".len() + ascon::TAG_SIZE);
/// ```
#[must_use]
pub fn encrypt(
    key: &[u8],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    plaintext: &[u8],
    variant: Variant,
) -> Vec<u8> {
    assert_eq!(
        key.len(),
        variant.key_len(),
        "key length does not match the variant"
    );

    let mut sponge = Sponge::new(key, nonce, variant);
    sponge.absorb(associated_data);
    let mut sealed = sponge.encrypt_blocks(plaintext);
    sealed.extend_from_slice(&sponge.finalize(key));
    sealed
}

// =============================================================================
// DECRYPT
// =============================================================================

/// Verify and decrypt `ciphertext_with_tag` produced by [`encrypt`].
///
/// The tag comparison is constant-time. On mismatch no plaintext is
/// released: forged or corrupted input yields only [`AuthenticationError`].
///
/// # Errors
/// Returns [`AuthenticationError`] when the tag does not verify.
///
/// # Panics
/// Panics if `key.len() != variant.key_len()` or if the input is shorter
/// than [`TAG_SIZE`] bytes. Both are contract violations, checked before any
/// permutation work.
///
/// # Example
/// ```rust
/// use ascon::Variant;
///
/// let key = [0x42u8; 16];
/// let nonce = [7u8; 16];
/// let sealed = ascon::encrypt(&key, &nonce, b"header", b"payload", Variant::Ascon128a);
///
/// let opened = ascon::decrypt(&key, &nonce, b"header", &sealed, Variant::Ascon128a)?;
/// assert_eq!(opened, b"payload");
/// # Ok::<(), ascon::AuthenticationError>(())
/// ```
pub fn decrypt(
    key: &[u8],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    ciphertext_with_tag: &[u8],
    variant: Variant,
) -> Result<Vec<u8>, AuthenticationError> {
    assert_eq!(
        key.len(),
        variant.key_len(),
        "key length does not match the variant"
    );
    assert!(
        ciphertext_with_tag.len() >= TAG_SIZE,
        "ciphertext shorter than the tag"
    );

    let (body, expected_tag) = ciphertext_with_tag.split_at(ciphertext_with_tag.len() - TAG_SIZE);

    let mut sponge = Sponge::new(key, nonce, variant);
    sponge.absorb(associated_data);
    let plaintext = sponge.decrypt_blocks(body);
    let tag = sponge.finalize(key);

    if bool::from(tag.as_slice().ct_eq(expected_tag)) {
        Ok(plaintext)
    } else {
        Err(AuthenticationError)
    }
}

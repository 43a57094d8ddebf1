//! Shared constants and error types.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// SIZES
// =============================================================================

/// Authentication tag length in bytes, common to every variant.
pub const TAG_SIZE: usize = 16;

/// Nonce length in bytes, common to every variant.
pub const NONCE_SIZE: usize = 16;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Tag verification failed during decryption.
///
/// An expected outcome for corrupted or forged input, not a bug: the
/// ciphertext, associated data, key, or nonce does not match the tag. No
/// plaintext is released when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationError;

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication failed: tag does not match ciphertext and associated data")
    }
}

#[cfg(feature = "std")]
impl error::Error for AuthenticationError {}

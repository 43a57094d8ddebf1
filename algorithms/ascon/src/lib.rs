#![cfg_attr(not(feature = "std"), no_std)]

//! # Ascon
//!
//! Ascon authenticated encryption with associated data (AEAD): the 128a
//! parameterization plus the 128 and 80pq variants, built on the 320-bit
//! sponge/duplex construction and the 12-round Ascon permutation.
//!
//! Interoperable bit for bit with any conformant Ascon v1.2 implementation,
//! down to microcontroller peers.

//! # Usage
//! ```rust
//! use ascon::Variant;
//!
//! let key = [0x11u8; 16];
//! let nonce = [0u8; 16]; // must never repeat under the same key
//!
//! // 1. Seal: ciphertext followed by a 16-byte tag
//! let sealed = ascon::encrypt(&key, &nonce, b"header", b"payload", Variant::Ascon128a);
//! assert_eq!(sealed.len(), b"payload".len() + ascon::TAG_SIZE);
//!
//! // 2. Open: verifies the tag before releasing any plaintext
//! let opened = ascon::decrypt(&key, &nonce, b"header", &sealed, Variant::Ascon128a)?;
//! assert_eq!(opened, b"payload");
//! # Ok::<(), ascon::AuthenticationError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod aead;
// Re-export the raw permutation for benchmarking/testing, but hide from docs
#[doc(hidden)]
pub mod permutation; // Public for bench/test use only
mod sponge;
mod types;
mod variant;

// =============================================================================
// EXPORTS
// =============================================================================

pub use aead::{decrypt, encrypt};
pub use types::{AuthenticationError, NONCE_SIZE, TAG_SIZE};
pub use variant::Variant;

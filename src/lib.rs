#![cfg_attr(not(feature = "std"), no_std)]

//! # Spritz
//!
//! The Spritz sponge of Rivest and Schuldt: an RC4-style 256-byte
//! permutation generalized into a sponge, yielding a stream cipher, a
//! cryptographic hash, and a MAC from one shared state machine. No heap
//! allocation, `no_std`-capable, suitable for constrained targets.
//!
//! # Usage
//! ```rust
//! // 1. Stream cipher (encrypt and decrypt are the same transform)
//! let msg = b"attack at dawn";
//! let mut tx = spritz::Spritz::new_with_iv(b"key", b"nonce-01");
//! let mut sealed = [0u8; 14];
//! tx.encrypt(msg, &mut sealed);
//!
//! let mut rx = spritz::Spritz::new_with_iv(b"key", b"nonce-01");
//! let mut opened = [0u8; 14];
//! rx.decrypt(&sealed, &mut opened);
//! assert_eq!(&opened, msg);
//!
//! // 2. Hashing
//! let mut digest = [0u8; 32];
//! spritz::hash(b"Performance Matters", &mut digest);
//!
//! // 3. Message authentication with constant-time verification
//! let mut tag = [0u8; 16];
//! spritz::mac(b"shared secret", msg, &mut tag);
//! assert!(spritz::verify_mac(b"shared secret", msg, &tag));
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod cipher;
mod ct;
mod hash;
mod mac;
mod oneshot;
mod sponge;
mod state;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;

pub use ct::{compare, wipe};
#[cfg(feature = "digest-trait")]
pub use hash::SpritzHashReader;
pub use hash::SpritzHash;
pub use mac::SpritzMac;
pub use oneshot::{hash, hash_with_config, mac, mac_with_config, verify_hash, verify_mac};
pub use state::{Spritz, STATE_RECORD_LEN};
pub use types::{SpritzConfig, MAX_DIGEST_LEN};

/// Semantic version of this crate, exposed for compatibility detection by
/// callers. Carries no behavioral contract.
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

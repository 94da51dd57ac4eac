//! One-shot hash, MAC, and constant-time verification helpers.

use crate::ct;
use crate::hash::SpritzHash;
use crate::mac::SpritzMac;
use crate::types::{SpritzConfig, MAX_DIGEST_LEN};

// =============================================================================
// HASHING
// =============================================================================

/// Hash `data` into `digest`, binding `digest.len()` into the input.
///
/// # Example
/// ```rust
/// let mut digest = [0u8; 32];
/// spritz::hash(b"ABC", &mut digest);
/// assert_eq!(&digest[..4], &[0x02, 0x8f, 0xa2, 0xb4]);
/// ```
pub fn hash(data: &[u8], digest: &mut [u8]) {
    hash_with_config(data, digest, SpritzConfig::new());
}

/// [`hash`] with side-channel hardening options.
pub fn hash_with_config(data: &[u8], digest: &mut [u8], cfg: SpritzConfig) {
    let mut hasher = SpritzHash::with_config(cfg);
    hasher.update(data);
    hasher.finalize_into(digest);
}

// =============================================================================
// MESSAGE AUTHENTICATION
// =============================================================================

/// Authenticate `msg` under `key` into `digest`.
pub fn mac(key: &[u8], msg: &[u8], digest: &mut [u8]) {
    mac_with_config(key, msg, digest, SpritzConfig::new());
}

/// [`mac`] with side-channel hardening options.
pub fn mac_with_config(key: &[u8], msg: &[u8], digest: &mut [u8], cfg: SpritzConfig) {
    let mut keyed = SpritzMac::with_config(key, cfg);
    keyed.update(msg);
    keyed.finalize_into(digest);
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the hash of `data` at `expected.len()` and compare in constant
/// time. Returns `false` for lengths no Spritz digest can have.
#[must_use]
pub fn verify_hash(data: &[u8], expected: &[u8]) -> bool {
    if expected.len() > MAX_DIGEST_LEN {
        return false;
    }
    let mut computed = [0u8; MAX_DIGEST_LEN];
    let computed = &mut computed[..expected.len()];
    hash(data, computed);
    let ok = ct::compare(computed, expected);
    ct::wipe(computed);
    ok
}

/// Recompute the MAC of `msg` under `key` at `expected.len()` and compare in
/// constant time.
///
/// This is the only sound way to check a received tag; a plain `==` exits on
/// the first mismatching byte and hands a timing oracle to the peer.
#[must_use]
pub fn verify_mac(key: &[u8], msg: &[u8], expected: &[u8]) -> bool {
    if expected.len() > MAX_DIGEST_LEN {
        return false;
    }
    let mut computed = [0u8; MAX_DIGEST_LEN];
    let computed = &mut computed[..expected.len()];
    mac(key, msg, computed);
    let ok = ct::compare(computed, expected);
    ct::wipe(computed);
    ok
}

//! Streaming MAC facade.
//!
//! A keyed sponge: the key is absorbed first and sealed off from the
//! message region by a stop marker, then the message streams in exactly as
//! for the hash. Verification must go through the constant-time helpers in
//! [`crate::verify_mac`] or [`crate::compare`]; an ordinary `==` on digests
//! is a timing oracle.

use crate::state::Spritz;
use crate::types::SpritzConfig;

/// Incremental Spritz MAC.
///
/// # Example
/// ```rust
/// use spritz::SpritzMac;
///
/// let mut mac = SpritzMac::new(b"shared secret");
/// mac.update(b"message part 1");
/// mac.update(b"message part 2");
/// let mut tag = [0u8; 16];
/// mac.finalize_into(&mut tag);
/// ```
#[derive(Clone)]
pub struct SpritzMac {
    state: Spritz,
}

impl SpritzMac {
    /// Seed a keyed sponge with a boundary marker before the message region.
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        Self::with_config(key, SpritzConfig::new())
    }

    /// [`Self::new`] with side-channel hardening options.
    #[must_use]
    pub fn with_config(key: &[u8], cfg: SpritzConfig) -> Self {
        let mut state = Spritz::keyless(cfg);
        state.absorb(key);
        state.absorb_stop();
        Self { state }
    }

    /// Absorb a message chunk; boundaries between chunks are invisible.
    pub fn update(&mut self, msg: &[u8]) {
        self.state.absorb(msg);
    }

    /// Bind `digest.len()` into the input, then fill `digest`.
    ///
    /// Consumes the MAC state; with secure wiping enabled the keyed state is
    /// zeroed when it drops at the end of this call.
    pub fn finalize_into(mut self, digest: &mut [u8]) {
        self.state.finalize_digest(digest);
    }
}

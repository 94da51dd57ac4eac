//! Streaming hash facade.
//!
//! A keyless sponge absorbed incrementally and squeezed once. The requested
//! digest length is bound into the input at finalization, so digests of
//! different lengths are unrelated rather than truncations of one another.

use crate::state::Spritz;
use crate::types::SpritzConfig;

#[cfg(feature = "digest-trait")]
use digest::{ExtendableOutput, Reset, Update, XofReader};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental Spritz hash.
///
/// # Example
/// ```rust
/// use spritz::SpritzHash;
///
/// let mut hasher = SpritzHash::new();
/// hasher.update(b"chunk 1");
/// hasher.update(b"chunk 2");
/// let mut digest = [0u8; 32];
/// hasher.finalize_into(&mut digest);
/// ```
#[derive(Clone)]
pub struct SpritzHash {
    state: Spritz,
}

impl SpritzHash {
    /// Fresh keyless hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(SpritzConfig::new())
    }

    /// Fresh keyless hasher with side-channel hardening options.
    #[must_use]
    pub const fn with_config(cfg: SpritzConfig) -> Self {
        Self {
            state: Spritz::keyless(cfg),
        }
    }

    /// Absorb a chunk of input. Chunk boundaries do not affect the digest:
    /// `update(b"AB"); update(b"C")` equals `update(b"ABC")`.
    pub fn update(&mut self, data: &[u8]) {
        self.state.absorb(data);
    }

    /// Bind `digest.len()` into the input, then fill `digest`.
    ///
    /// Consumes the hasher; with secure wiping enabled the state is zeroed
    /// when it drops at the end of this call. Digest lengths above
    /// [`crate::MAX_DIGEST_LEN`] are bound modulo 256 (caller contract).
    pub fn finalize_into(mut self, digest: &mut [u8]) {
        self.state.finalize_digest(digest);
    }

    /// Start over from the fresh keyless state, keeping the configuration.
    pub fn reset(&mut self) {
        self.state.reset_state();
    }
}

impl Default for SpritzHash {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DIGEST TRAIT INTEGRATION
// =============================================================================

/// Extendable-output reader squeezing an unbounded keystream from a
/// finalized hasher.
#[cfg(feature = "digest-trait")]
#[derive(Clone)]
pub struct SpritzHashReader {
    state: Spritz,
}

#[cfg(feature = "digest-trait")]
impl XofReader for SpritzHashReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.state.squeeze(buffer);
    }
}

#[cfg(feature = "digest-trait")]
impl Update for SpritzHash {
    fn update(&mut self, data: &[u8]) {
        Self::update(self, data);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for SpritzHash {
    fn reset(&mut self) {
        Self::reset(self);
    }
}

#[cfg(feature = "digest-trait")]
impl ExtendableOutput for SpritzHash {
    type Reader = SpritzHashReader;

    /// Finalize as an extendable-output function.
    ///
    /// The stop marker is absorbed but no length byte is: an XOF does not
    /// know its output length up front. Reading `n` bytes therefore differs
    /// from [`SpritzHash::finalize_into`] with an `n`-byte digest, which is
    /// the canonical, length-bound form.
    fn finalize_xof(mut self) -> Self::Reader {
        self.state.absorb_stop();
        SpritzHashReader { state: self.state }
    }
}

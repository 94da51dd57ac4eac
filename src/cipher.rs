//! Stream cipher and keystream session API.
//!
//! Encryption and decryption are the same transform: XOR against the
//! keystream squeezed from a keyed state. The nonce is separated from the
//! key by a stop marker, so a key/nonce pair can never collide with a
//! longer key absorbed contiguously.

use crate::state::Spritz;
use crate::types::SpritzConfig;
use zeroize::Zeroize;

impl Spritz {
    // =========================================================================
    // SESSION SETUP
    // =========================================================================

    /// Key a fresh state.
    ///
    /// An empty key is legal but cryptographically degenerate; whether that
    /// is acceptable is the caller's call.
    ///
    /// # Example
    /// ```rust
    /// let mut session = spritz::Spritz::new(b"my key");
    /// let byte = session.random_byte();
    /// # let _ = byte;
    /// ```
    #[must_use]
    pub fn new(key: &[u8]) -> Self {
        Self::with_config(key, SpritzConfig::new())
    }

    /// Key a fresh state with side-channel hardening options.
    #[must_use]
    pub fn with_config(key: &[u8], cfg: SpritzConfig) -> Self {
        let mut state = Self::keyless(cfg);
        state.absorb(key);
        state
    }

    /// Key a fresh state and bind a nonce, separated by a stop marker.
    #[must_use]
    pub fn new_with_iv(key: &[u8], nonce: &[u8]) -> Self {
        Self::with_iv_and_config(key, nonce, SpritzConfig::new())
    }

    /// [`Self::new_with_iv`] with side-channel hardening options.
    #[must_use]
    pub fn with_iv_and_config(key: &[u8], nonce: &[u8], cfg: SpritzConfig) -> Self {
        let mut state = Self::with_config(key, cfg);
        state.absorb_stop();
        state.absorb(nonce);
        state
    }

    /// Re-key this state in place, discarding all prior absorbed input and
    /// keystream position. Keeps the configuration.
    pub fn rekey(&mut self, key: &[u8]) {
        self.reset_state();
        self.absorb(key);
    }

    /// Re-key this state in place with a key and nonce.
    pub fn rekey_with_iv(&mut self, key: &[u8], nonce: &[u8]) {
        self.rekey(key);
        self.absorb_stop();
        self.absorb(nonce);
    }

    /// Fold additional entropy into a live session without resetting it,
    /// for mid-stream reseeding.
    pub fn add_entropy(&mut self, bytes: &[u8]) {
        self.absorb(bytes);
    }

    // =========================================================================
    // KEYSTREAM OUTPUT
    // =========================================================================

    /// One keystream byte.
    pub fn random_byte(&mut self) -> u8 {
        self.drip()
    }

    /// Four keystream bytes composed most-significant-first.
    pub fn random_u32(&mut self) -> u32 {
        let mut v = 0u32;
        for _ in 0..4 {
            v = (v << 8) | u32::from(self.random_byte());
        }
        v
    }

    /// Uniform value in `[0, bound)` without modulo bias.
    ///
    /// Draws are rejected when they fall beyond the largest complete
    /// multiple of `bound` below 2^32, so every residue is equally likely.
    /// Returns 0 when `bound < 2` (no randomness requested).
    #[allow(clippy::cast_possible_truncation)]
    pub fn random_uniform(&mut self, bound: u32) -> u32 {
        if bound < 2 {
            return 0;
        }
        let bound = u64::from(bound);
        let limit = ((1u64 << 32) / bound) * bound;
        loop {
            let draw = u64::from(self.random_u32());
            if draw < limit {
                // draw % bound < bound <= u32::MAX
                return (draw % bound) as u32;
            }
        }
    }

    // =========================================================================
    // ENCRYPT / DECRYPT
    // =========================================================================

    /// XOR `input` with keystream into `output`.
    ///
    /// Only the first `min(input.len(), output.len())` bytes are processed;
    /// exactly that many keystream bytes are consumed.
    pub fn encrypt(&mut self, input: &[u8], output: &mut [u8]) {
        if self.a > 0 {
            self.shuffle();
        }
        let mut ks = 0u8;
        for (slot, &byte) in output.iter_mut().zip(input) {
            ks = self.drip();
            *slot = byte ^ ks;
        }
        if self.cfg.paranoid_enabled() {
            ks.zeroize();
        }
    }

    /// Identical to [`Self::encrypt`]; decryption is the same XOR transform.
    pub fn decrypt(&mut self, input: &[u8], output: &mut [u8]) {
        self.encrypt(input, output);
    }

    /// XOR `data` with keystream in place, for aliased input and output.
    pub fn crypt_in_place(&mut self, data: &mut [u8]) {
        if self.a > 0 {
            self.shuffle();
        }
        let mut ks = 0u8;
        for byte in data.iter_mut() {
            ks = self.drip();
            *byte ^= ks;
        }
        if self.cfg.paranoid_enabled() {
            ks.zeroize();
        }
    }
}

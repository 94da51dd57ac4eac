//! Absorb/squeeze sponge protocol on top of the permutation engine.
//!
//! Input enters the state half a byte at a time through the absorption slots
//! `s[128..256]`; output leaves through a three-lookup chain. The ordering
//! rules here are load-bearing: nibbles are absorbed low-first, a pending
//! absorption always forces a shuffle before the first squeezed byte, and
//! the stop marker advances the slot counter without touching the
//! permutation.

use crate::state::{Spritz, N};

impl Spritz {
    // =========================================================================
    // ABSORPTION
    // =========================================================================

    /// Mix `data` into the state, byte by byte. Empty input is a no-op.
    ///
    /// Absorbing `"AB"` then `"C"` is identical to absorbing `"ABC"` in one
    /// call; no marker is inserted between calls.
    pub fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            self.absorb_byte(byte);
        }
    }

    /// Absorb one byte: low nibble first, then high.
    fn absorb_byte(&mut self, byte: u8) {
        self.absorb_nibble(byte & 0x0F);
        self.absorb_nibble(byte >> 4);
    }

    /// Absorb one half-byte (`x < 16`): swap slot `a` with slot `128 + x`.
    fn absorb_nibble(&mut self, x: u8) {
        if usize::from(self.a) == N / 2 {
            self.shuffle();
        }
        self.s.swap(usize::from(self.a), usize::from(x) + N / 2);
        self.a = self.a.wrapping_add(1);
    }

    /// Domain-separation marker: consumes one absorption slot without
    /// swapping, so `absorb(a); absorb_stop(); absorb(b)` never collides
    /// with `absorb(ab)` absorbed contiguously.
    pub fn absorb_stop(&mut self) {
        if usize::from(self.a) == N / 2 {
            self.shuffle();
        }
        self.a = self.a.wrapping_add(1);
    }

    // =========================================================================
    // SQUEEZING
    // =========================================================================

    /// Produce one output byte from the current state, updating `z`.
    fn output(&mut self) -> u8 {
        let t0 = self.s[usize::from(self.z.wrapping_add(self.k))];
        let t1 = self.s[usize::from(self.i.wrapping_add(t0))];
        self.z = self.s[usize::from(self.j.wrapping_add(t1))];
        self.z
    }

    /// One keystream byte, coupled to one state advance.
    ///
    /// Any input absorbed since the last shuffle is folded into the
    /// permutation first, so a produced byte can never ignore pending input.
    pub fn drip(&mut self) -> u8 {
        if self.a > 0 {
            self.shuffle();
        }
        self.update();
        self.output()
    }

    /// Fill `out` with keystream bytes. An empty `out` is a no-op.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.a > 0 {
            self.shuffle();
        }
        for slot in out.iter_mut() {
            *slot = self.drip();
        }
    }

    // =========================================================================
    // DIGEST FINALIZATION (shared by hash and MAC facades)
    // =========================================================================

    /// Stop marker, length byte, squeeze.
    ///
    /// Binding the requested digest length into the input means digests of
    /// different lengths are not truncations of one another. The length is
    /// bound as a single byte; see [`crate::MAX_DIGEST_LEN`].
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn finalize_digest(&mut self, digest: &mut [u8]) {
        self.absorb_stop();
        self.absorb_byte(digest.len() as u8);
        self.squeeze(digest);
    }
}

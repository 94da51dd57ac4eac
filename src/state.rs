//! Permutation state engine.
//!
//! The `Spritz` record is the single entity every construction in this crate
//! operates on: a 256-entry permutation plus six one-byte registers. The
//! primitives here (`update`, `whip`, `crush`, `shuffle`) are the diffusion
//! schedule of Rivest and Schuldt's Spritz; everything else in the crate is
//! sequencing on top of them.

use crate::types::SpritzConfig;
use zeroize::Zeroize;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Size of the permutation: Spritz-N with N = 256.
pub(crate) const N: usize = 256;

/// Size in bytes of the serialized state record
/// (permutation, then `i`, `j`, `k`, `z`, `a`, `w`).
pub const STATE_RECORD_LEN: usize = N + 6;

// =============================================================================
// STATE RECORD
// =============================================================================

/// The Spritz state: one 256-byte permutation and six registers.
///
/// A value is created by the cipher constructors ([`Spritz::new`],
/// [`Spritz::new_with_iv`]) or internally by the hash and MAC facades. It is
/// caller-owned, stack-allocatable, and never shared: distinct values are
/// fully independent, and a single value must not be mutated from multiple
/// threads without external locking.
///
/// Register roles: `i`/`j`/`k` drive the permutation walk, `z` is the last
/// output byte, `a` counts absorbed half-bytes since the last shuffle, and
/// `w` is the step width (always odd, hence coprime with 256).
#[derive(Clone)]
pub struct Spritz {
    pub(crate) s: [u8; N],
    pub(crate) i: u8,
    pub(crate) j: u8,
    pub(crate) k: u8,
    pub(crate) z: u8,
    pub(crate) a: u8,
    pub(crate) w: u8,
    pub(crate) cfg: SpritzConfig,
}

impl Spritz {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Fresh keyless state: identity permutation, all registers zero, `w = 1`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn keyless(cfg: SpritzConfig) -> Self {
        let mut s = [0u8; N];
        let mut v = 0;
        while v < N {
            s[v] = v as u8;
            v += 1;
        }
        Self {
            s,
            i: 0,
            j: 0,
            k: 0,
            z: 0,
            a: 0,
            w: 1,
            cfg,
        }
    }

    /// Reset to the fresh keyless state, keeping the configuration.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn reset_state(&mut self) {
        for (v, slot) in self.s.iter_mut().enumerate() {
            *slot = v as u8;
        }
        self.i = 0;
        self.j = 0;
        self.k = 0;
        self.z = 0;
        self.a = 0;
        self.w = 1;
    }

    // =========================================================================
    // PERMUTATION PRIMITIVES
    // =========================================================================

    /// One non-linear permutation step: advance `i` by `w`, rederive `j` and
    /// `k` through permutation lookups, swap `s[i]` and `s[j]`.
    pub(crate) fn update(&mut self) {
        self.i = self.i.wrapping_add(self.w);
        let si = self.s[usize::from(self.i)];
        self.j = self
            .k
            .wrapping_add(self.s[usize::from(self.j.wrapping_add(si))]);
        self.k = self
            .i
            .wrapping_add(self.k)
            .wrapping_add(self.s[usize::from(self.j)]);
        self.s.swap(usize::from(self.i), usize::from(self.j));
    }

    /// `update()` applied `r` times, then `w` advanced to the next odd value.
    ///
    /// 256 is even, so adding 2 to an odd `w` keeps it odd; an odd `w` is
    /// coprime with 256 and guarantees `i` sweeps the whole permutation.
    pub(crate) fn whip(&mut self, r: usize) {
        for _ in 0..r {
            self.update();
        }
        self.w = self.w.wrapping_add(2);
    }

    /// Lossy compare-and-swap pass: sorts each pair `(s[v], s[255-v])`.
    ///
    /// This deliberately maps distinct states onto the same state, which is
    /// what lets the sponge compress inputs longer than itself. Operates on
    /// secret-derived values, so the masked variant is selected when
    /// constant-time mode is on.
    pub(crate) fn crush(&mut self) {
        if self.cfg.ct_enabled() {
            self.crush_masked();
        } else {
            self.crush_fast();
        }
    }

    fn crush_fast(&mut self) {
        for v in 0..N / 2 {
            let u = N - 1 - v;
            if self.s[v] > self.s[u] {
                self.s.swap(v, u);
            }
        }
    }

    /// Branch-free crush: swap through an all-ones/all-zeros mask derived by
    /// arithmetic sign extension, identical instruction trace either way.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn crush_masked(&mut self) {
        for v in 0..N / 2 {
            let u = N - 1 - v;
            let x = self.s[v];
            let y = self.s[u];
            // 0xFF when x > y, 0x00 otherwise
            let m = ((i16::from(y) - i16::from(x)) >> 8) as u8;
            let t = (x ^ y) & m;
            self.s[v] = x ^ t;
            self.s[u] = y ^ t;
        }
    }

    /// Full re-mix: three 512-step whips interleaved with two crush passes,
    /// then the absorbed-nibble counter starts over.
    pub(crate) fn shuffle(&mut self) {
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.crush();
        self.whip(2 * N);
        self.a = 0;
    }

    // =========================================================================
    // ERASURE
    // =========================================================================

    /// Overwrite the permutation and every register with zero.
    ///
    /// Runs automatically on drop when the configuration enables secure
    /// wiping; long-lived cipher sessions can call it early. A wiped state is
    /// invalid and must be re-keyed before further use.
    pub fn wipe(&mut self) {
        self.s.zeroize();
        self.i.zeroize();
        self.j.zeroize();
        self.k.zeroize();
        self.z.zeroize();
        self.a.zeroize();
        self.w.zeroize();
    }

    // =========================================================================
    // STATE RECORD (OPTIONAL EXTENSION)
    // =========================================================================

    /// Serialize the live state as a contiguous fixed-size record:
    /// the 256 permutation bytes, then `i`, `j`, `k`, `z`, `a`, `w`.
    #[must_use]
    pub fn to_state_record(&self) -> [u8; STATE_RECORD_LEN] {
        let mut rec = [0u8; STATE_RECORD_LEN];
        rec[..N].copy_from_slice(&self.s);
        rec[N] = self.i;
        rec[N + 1] = self.j;
        rec[N + 2] = self.k;
        rec[N + 3] = self.z;
        rec[N + 4] = self.a;
        rec[N + 5] = self.w;
        rec
    }

    /// Rebuild a state from a record produced by [`Self::to_state_record`].
    ///
    /// The record is trusted as-is: feeding bytes that did not come from a
    /// live state (permutation not a bijection, even `w`, `a` out of range)
    /// yields a state with none of this crate's guarantees.
    #[must_use]
    pub fn from_state_record(record: &[u8; STATE_RECORD_LEN], cfg: SpritzConfig) -> Self {
        let mut s = [0u8; N];
        s.copy_from_slice(&record[..N]);
        Self {
            s,
            i: record[N],
            j: record[N + 1],
            k: record[N + 2],
            z: record[N + 3],
            a: record[N + 4],
            w: record[N + 5],
            cfg,
        }
    }
}

impl Drop for Spritz {
    fn drop(&mut self) {
        if self.cfg.wipe_enabled() {
            self.wipe();
        }
    }
}

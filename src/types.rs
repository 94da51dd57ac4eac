//! Shared types used across the Spritz library.

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum digest length (in bytes) the hash and MAC facades can bind.
///
/// The requested output length is absorbed into the sponge as a single byte,
/// so digests longer than 255 bytes cannot be length-bound. Callers needing
/// more output should use the extendable-output reader instead.
pub const MAX_DIGEST_LEN: usize = 255;

// =============================================================================
// SIDE-CHANNEL HARDENING
// =============================================================================

/// Side-channel hardening options, fixed when a state is constructed.
///
/// The flags trade a little throughput for resistance against timing probes
/// and memory disclosure. `paranoid` implies the other two.
///
/// # Example
/// ```rust
/// use spritz::SpritzConfig;
///
/// let cfg = SpritzConfig::new().constant_time().secure_wipe();
/// let mac = spritz::SpritzMac::with_config(b"key", cfg);
/// # let _ = mac;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpritzConfig {
    constant_time: bool,
    secure_wipe: bool,
    paranoid: bool,
}

impl SpritzConfig {
    /// Default configuration: no hardening, maximum throughput.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constant_time: false,
            secure_wipe: false,
            paranoid: false,
        }
    }

    /// Enable branch-free `crush`, removing the only secret-dependent branch
    /// in the permutation schedule.
    #[must_use]
    pub const fn constant_time(mut self) -> Self {
        self.constant_time = true;
        self
    }

    /// Zero the permutation state on drop and after finalizing calls.
    #[must_use]
    pub const fn secure_wipe(mut self) -> Self {
        self.secure_wipe = true;
        self
    }

    /// Everything above, plus wiping of transient keystream and scratch
    /// bytes inside each operation.
    #[must_use]
    pub const fn paranoid() -> Self {
        Self {
            constant_time: true,
            secure_wipe: true,
            paranoid: true,
        }
    }

    /// Whether the branch-free `crush` path is selected.
    pub(crate) const fn ct_enabled(self) -> bool {
        self.constant_time || self.paranoid
    }

    /// Whether the state wipes itself on drop.
    pub(crate) const fn wipe_enabled(self) -> bool {
        self.secure_wipe || self.paranoid
    }

    /// Whether transient scratch values are wiped inside operations.
    pub(crate) const fn paranoid_enabled(self) -> bool {
        self.paranoid
    }
}

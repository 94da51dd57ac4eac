//! Constant-time comparison and secure erasure.
//!
//! The two obligations spec'd onto every caller of the digest/MAC surface:
//! compare tags without an early exit, and leave no secret remnants behind.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Constant-time equality: the number of operations performed does not
/// depend on where, or whether, the slices differ.
///
/// Two empty slices compare equal. Slices of different lengths compare
/// unequal; lengths are public values, so taking that path early leaks
/// nothing secret.
///
/// # Example
/// ```rust
/// let mut tag = [0u8; 16];
/// spritz::mac(b"key", b"msg", &mut tag);
/// let expected = tag;
/// assert!(spritz::compare(&tag, &expected));
/// ```
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Overwrite `buf` with zero through a write the optimizer cannot elide.
pub fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}

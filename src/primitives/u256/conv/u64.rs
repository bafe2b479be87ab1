//! Conversions between `U256` and 64-bit integer representations
//!
//! This module defines explicit conversions between the fixed-size `U256`
//! type and 64-bit integer forms.
//!
//! The limb array `[u64; 4]` is the native representation of `U256`, so
//! the array conversions here are the cheapest way in and out of the
//! type. The array is ordered from most significant to least significant
//! limb, matching the big-endian convention used everywhere else.

use crate::primitives::U256;

/// Converts a `U256` into four 64-bit limbs.
///
/// The resulting array is ordered from most significant to least
/// significant limb.
impl From<U256> for [u64; 4] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts four 64-bit limbs into a `U256`.
///
/// The input array must be ordered from most significant to least
/// significant limb.
impl From<[u64; 4]> for U256 {
    fn from(value: [u64; 4]) -> Self {
        U256(value)
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are
/// zero. Otherwise, an error is returned to signal that the value does
/// not fit into a 64-bit integer.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..3].iter().any(|&l| l != 0) {
            return Err(());
        }

        Ok(value.0[3])
    }
}

/// Converts a `u64` into a `U256`.
///
/// The value becomes the least significant limb of the 256-bit integer,
/// with the upper limbs set to zero.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256([0, 0, 0, value])
    }
}

/// Borrows the underlying limb array of a `U256`.
///
/// This is useful for read-only access in hashing, comparison, or
/// serialization routines.
impl AsRef<[u64; 4]> for U256 {
    fn as_ref(&self) -> &[u64; 4] {
        &self.0
    }
}

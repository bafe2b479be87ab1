//! Conversions between `U256` and native platform integers
//!
//! This module provides explicit and safe conversions between the
//! fixed-size `U256` type and `usize`.
//!
//! The conversions are designed to:
//! - preserve big-endian semantics
//! - avoid implicit truncation
//! - fail explicitly when a value does not fit in the target type

use crate::primitives::U256;

/// Converts a `usize` into a `U256`.
///
/// The value is placed in the least significant bits of the 256-bit
/// integer.
impl From<usize> for U256 {
    fn from(value: usize) -> Self {
        U256::from(value as u64)
    }
}

/// Attempts to convert a `U256` into a `usize`.
///
/// The conversion succeeds only if the value fits entirely within the
/// platform's `usize` width.
impl TryFrom<U256> for usize {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        let low = u64::try_from(value)?;

        usize::try_from(low).map_err(|_| ())
    }
}

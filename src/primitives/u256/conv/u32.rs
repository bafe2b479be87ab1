//! Conversions between `U256` and 32-bit integer representations
//!
//! This module defines explicit conversions between the fixed-size `U256`
//! type and 32-bit integer forms, preserving big-endian semantics and
//! preventing implicit truncation.

use crate::primitives::U256;

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are
/// zero. If any higher-order bit is set, the conversion fails.
impl TryFrom<U256> for u32 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..3].iter().any(|&l| l != 0) || value.0[3] > u64::from(u32::MAX) {
            return Err(());
        }

        Ok(value.0[3] as u32)
    }
}

/// Converts a `u32` into a `U256`.
///
/// The value is placed in the least significant 32 bits of the 256-bit
/// integer, with all higher bits set to zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        U256([0, 0, 0, u64::from(value)])
    }
}

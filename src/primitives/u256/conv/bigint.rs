//! Conversions between `U256` and arbitrary-precision integers
//!
//! This module defines the arbitrary-precision boundary of the `U256`
//! type: conversions from `BigInt` and base-10 numeral strings into the
//! type, and lossless conversions back out.
//!
//! Inbound conversions are fallible and funnel through the same bounds
//! check as `U256::new`: negative values and values wider than 256 bits
//! are rejected, never wrapped. Outbound conversions are infallible.

use crate::primitives::fixed_width::FixedWidthIntegerError;
use crate::primitives::u256::U256;

use num_bigint::{BigInt, BigUint};

use std::str::FromStr;

/// Attempts to convert a `BigInt` into a `U256`.
///
/// Equivalent to `U256::new`: the conversion succeeds only if the value
/// lies in `[0, 2^256 - 1]`.
impl TryFrom<&BigInt> for U256 {
    type Error = FixedWidthIntegerError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        U256::new(value)
    }
}

impl TryFrom<BigInt> for U256 {
    type Error = FixedWidthIntegerError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        U256::new(&value)
    }
}

/// Converts a `U256` into a `BigInt`.
///
/// The conversion is lossless; the result is always non-negative.
impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        value.to_bigint()
    }
}

/// Converts a `U256` into a `BigUint`.
impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        value.to_biguint()
    }
}

/// Parses a `U256` from a base-10 numeral string.
///
/// The string is coerced to an arbitrary-precision integer first, then
/// bounds-checked like any other constructor input. A string that does
/// not parse as an integer fails with `InvalidNumeral`; a string denoting
/// a negative or too-wide value fails with `OutOfBounds`.
impl FromStr for U256 {
    type Err = FixedWidthIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = BigInt::from_str(s).map_err(|_| FixedWidthIntegerError::InvalidNumeral)?;

        U256::new(&value)
    }
}

//! Core definition of the 256-bit unsigned integer.
//!
//! This file holds the type itself, its constants, bounds-checked
//! construction, the bit-count scans, and the formatting impls. Operator
//! traits live in `ops`, conversions in `conv`.

use crate::bits;
use crate::primitives::fixed_width::{FixedWidthInteger, FixedWidthIntegerError};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use std::fmt::{Binary, Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as four 64-bit limbs in **big-endian** limb order:
/// `self.0[0]` holds the most significant 64 bits. Lexicographic ordering
/// of the limb array therefore matches numeric ordering, and the derived
/// comparison traits compare values numerically.
///
/// Every reachable instance holds a magnitude within `[0, 2^256 - 1]`;
/// the fixed limb array cannot represent anything else, so no operation
/// can produce an out-of-range value. Construction from caller-supplied
/// arbitrary-precision input is bounds-checked and rejects values outside
/// that range rather than wrapping them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// Width of the type in bits.
    pub const WIDTH: u32 = 256;

    /// The value zero.
    pub const ZERO: Self = Self([0; 4]);

    /// The value one.
    pub const ONE: Self = Self([0, 0, 0, 1]);

    /// The maximum representable value (2²⁵⁶ − 1).
    ///
    /// This is the instance form of the type's mask: every bit set.
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Returns the mask covering all bits of the type, `2^256 - 1`, as an
    /// arbitrary-precision value.
    pub fn mask() -> BigUint {
        (BigUint::one() << Self::WIDTH) - BigUint::one()
    }

    /// Checks if `value` is within bounds of this type.
    ///
    /// Accepts any integer, including negative values and values far
    /// exceeding the mask, and returns `true` only for values in
    /// `[0, 2^256 - 1]`.
    pub fn is_in_bounds(value: &BigInt) -> bool {
        value.sign() != Sign::Minus && value.bits() <= u64::from(Self::WIDTH)
    }

    /// Constructs a `U256` holding exactly `value`.
    ///
    /// The input is an arbitrary-precision integer; conversions from
    /// native integers and base-10 numeral strings are provided as
    /// `From`/`TryFrom`/`FromStr` impls and funnel through the same
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `FixedWidthIntegerError::OutOfBounds` if `value` is
    /// negative or greater than the mask. Construction never wraps
    /// caller-supplied input.
    pub fn new(value: &BigInt) -> std::result::Result<Self, FixedWidthIntegerError> {
        if !Self::is_in_bounds(value) {
            return Err(FixedWidthIntegerError::OutOfBounds);
        }

        // In bounds means the magnitude spans at most 32 bytes.
        let (_, bytes) = value.to_bytes_be();

        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);

        Ok(Self::from(out))
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// This method scans the integer from the most significant limb and
    /// returns the number of zero bits before the first one bit is
    /// encountered.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`. The zero
    /// value returns 256, because all of its bits are zero.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of trailing zero bits in the integer.
    ///
    /// This method scans the integer from the least significant limb and
    /// returns the number of zero bits before the first one bit is
    /// encountered.
    ///
    /// # Returns
    /// The number of trailing zero bits in the range `0..=256`. The zero
    /// value returns 256, because all of its bits are zero.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 64;
            } else {
                count += limb.trailing_zeros();
                return count;
            }
        }

        count
    }

    /// Returns the integer as an arbitrary-precision `BigUint`.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&<[u8; 32]>::from(*self))
    }

    /// Returns the integer as an arbitrary-precision `BigInt`.
    ///
    /// This is the single point where the internal magnitude is exposed as
    /// an unbounded integer. The result is always within `[0, 2^256 - 1]`.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.to_biguint())
    }
}

impl FixedWidthInteger for U256 {
    const WIDTH: u32 = 256;

    fn mask() -> BigUint {
        U256::mask()
    }

    fn is_in_bounds(value: &BigInt) -> bool {
        U256::is_in_bounds(value)
    }

    fn new(value: &BigInt) -> std::result::Result<Self, FixedWidthIntegerError> {
        U256::new(value)
    }

    fn leading_zeros(&self) -> u32 {
        U256::leading_zeros(self)
    }

    fn trailing_zeros(&self) -> u32 {
        U256::trailing_zeros(self)
    }

    fn to_bigint(&self) -> BigInt {
        U256::to_bigint(self)
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Each byte is printed as two uppercase hexadecimal characters,
    /// separated by `:` for readability.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in <[u8; 32]>::from(*self).iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl Binary for U256 {
    /// Formats the value as its full 256-character bit string, most
    /// significant bit first, zero-padded to the width of the type.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&bits::to_bit_string(&self.to_biguint(), Self::WIDTH))
    }
}

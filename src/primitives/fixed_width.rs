//! Fixed-width integer capability set
//!
//! This module defines the `FixedWidthInteger` trait, the abstract
//! interface shared by every fixed-width unsigned integer in this crate,
//! together with the errors those types can raise.
//!
//! The trait captures the full capability set as bounds and methods:
//! equality and ordering against instances of the same concrete type,
//! bitwise negation/AND/OR/XOR, logical shifts by a plain bit count, and
//! leading/trailing zero counts. Because every operator bound uses
//! `Output = Self`, the operations are closed over the implementing type:
//! no operation can produce a value of a different width, and values of
//! different widths can never be mixed in a single expression.

use num_bigint::{BigInt, BigUint};

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Errors raised by fixed-width integer construction.
#[derive(Debug)]
pub enum FixedWidthIntegerError {
    /// The supplied value does not fit within the width of the type.
    ///
    /// Raised when construction is attempted with a negative value or a
    /// value greater than the type's mask. Construction never wraps
    /// caller-supplied input.
    OutOfBounds,

    /// The supplied numeral string is not a valid base-10 integer.
    InvalidNumeral,
}

/// An integer type of a fixed bit width.
///
/// Implementors are immutable value types: every operation returns a new
/// instance, and a constructed instance always holds a magnitude within
/// `[0, 2^WIDTH - 1]`. Operations that could exceed the width, such as
/// complement and left shift, truncate to the width instead.
pub trait FixedWidthInteger:
    Sized
    + Copy
    + Eq
    + Ord
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the type in bits.
    const WIDTH: u32;

    /// Returns the mask covering all bits of the type, `2^WIDTH - 1`.
    fn mask() -> BigUint;

    /// Checks if `value` is within bounds of the type.
    ///
    /// Accepts any integer, including negative values and values far
    /// exceeding the mask, and returns `false` for everything outside
    /// `[0, 2^WIDTH - 1]`.
    fn is_in_bounds(value: &BigInt) -> bool;

    /// Constructs an instance holding exactly `value`.
    ///
    /// # Errors
    ///
    /// Returns `FixedWidthIntegerError::OutOfBounds` if `value` is negative
    /// or greater than the mask.
    fn new(value: &BigInt) -> Result<Self, FixedWidthIntegerError>;

    /// Returns the number of leading zero bits in the binary
    /// representation of the integer.
    ///
    /// If no bit is set then this returns the width of the integer.
    fn leading_zeros(&self) -> u32;

    /// Returns the number of trailing zero bits in the binary
    /// representation of the integer.
    ///
    /// If no bit is set then this returns the width of the integer.
    fn trailing_zeros(&self) -> u32;

    /// Returns the integer as an arbitrary-precision `BigInt`.
    ///
    /// The conversion is lossless and the result is always within
    /// `[0, 2^WIDTH - 1]`.
    fn to_bigint(&self) -> BigInt;
}

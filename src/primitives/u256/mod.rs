//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer with value semantics and width-bounded bit operations.
//!
//! `U256` is designed as a low-level primitive rather than a full
//! big-integer abstraction. It provides only comparison, bitwise, shift,
//! and bit-count functionality, with explicit semantics and predictable
//! behavior. Typical use cases include:
//! - cryptographic quantities wider than native machine words
//! - protocol fields with exact wraparound and masking semantics
//! - keys, identifiers, and prefix comparisons
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions. Values enter the type through bounds-
//! checked construction and leave it through lossless conversion to an
//! arbitrary-precision integer.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
///
/// This type is re-exported as the primary 256-bit integer primitive.
pub use core::U256;

//! Fixed-width unsigned integer primitives
//!
//! This crate provides fixed-width unsigned integer value types for code
//! that needs integers wider than native machine words but with precise,
//! width-bounded semantics rather than arbitrary-precision growth.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a full big-integer arithmetic library. Every type is
//! an immutable value: operations never mutate an instance in place, and
//! every operation that produces an integer produces another validated
//! instance of the same width.
//!
//! # Module overview
//!
//! - `primitives`
//!   The fixed-width integer types themselves, together with the
//!   `FixedWidthInteger` trait describing the capability set they share:
//!   comparisons, bitwise negation/AND/OR/XOR, logical shifts, leading and
//!   trailing zero counts, and lossless conversion to an
//!   arbitrary-precision integer. `U256` is the concrete 256-bit
//!   instantiation.
//!
//! - `bits`
//!   Bit-level utilities operating on a raw arbitrary-precision magnitude
//!   plus an explicit width. These provide the reference semantics for the
//!   bit-count operations: a fixed-length bit-string representation and
//!   leading/trailing zero counts derived from it.
//!
//! # Design goals
//!
//! - No implicit wraparound on caller-supplied values: construction
//!   validates its input and rejects anything outside the type's width
//! - Wrapping (masking) semantics only where overflow is inherent to the
//!   operation, such as complement and left shift
//! - Stable, well-defined edge cases: shifting by the full width yields
//!   zero, and the zero value reports a leading/trailing zero count equal
//!   to the width
//! - Minimal and explicit APIs
//!
//! Arbitrary-precision values cross the crate boundary as `num_bigint`
//! integers; internally every type is a fixed array of machine words.

pub mod bits;
pub mod primitives;

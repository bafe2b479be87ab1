//! Primitive types
//!
//! This module defines the fixed-width unsigned integer primitives exposed
//! by this crate.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics and predictable behavior. They are intentionally minimal and
//! do not attempt to replicate full big-integer libraries: there is no
//! arbitrary-precision growth, and every operation stays within the bit
//! width of its type.
//!
//! The module contains:
//! - `FixedWidthInteger`: the capability set shared by every width
//! - `U256`: a fixed-size 256-bit unsigned integer
//!
//! Additional widths can be added by implementing the trait for further
//! limb arrays as the need arises.

mod fixed_width;
mod u256;

pub use fixed_width::{FixedWidthInteger, FixedWidthIntegerError};

/// Fixed-size unsigned integer primitive.
///
/// This type is re-exported as the primary 256-bit integer used across
/// consuming code.
pub use u256::U256;

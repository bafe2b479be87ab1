//! Bitwise operations for `U256`
//!
//! This module implements the bitwise and shift operator traits for the
//! `U256` type.
//!
//! The goal is **not** to provide a full big-integer library, but to supply
//! the width-bounded bit operations the type exists for:
//! - complement, AND, OR, XOR
//! - logical shifts by a plain bit count
//!
//! All operations are implemented explicitly on the fixed limb array, with:
//! - no heap allocation
//! - predictable behavior
//! - truncation to the 256-bit width where an operation could exceed it
//!
//! The internal representation is big-endian. Shift counts are ordinary
//! unsigned integers, not fixed-width values; a count of 256 or more
//! yields zero rather than panicking.

use crate::primitives::u256::U256;

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// Bitwise complement of a 256-bit value.
///
/// The complement is taken limb by limb, so the result is restricted to
/// the 256 bits of the type. There is no infinite-width sign extension.
impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter())
            .for_each(|(o, l)| *o = !l);

        U256(out)
    }
}

/// Bitwise AND between two 256-bit values.
impl BitAnd<U256> for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

/// Bitwise OR between two 256-bit values.
impl BitOr<U256> for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U256(out)
    }
}

/// Bitwise XOR between two 256-bit values.
impl BitXor<U256> for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

/// Logical left shift (`<<`) by a bit count.
///
/// Bits shifted beyond the top of the width are discarded. Shifts of 256
/// bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256([0; 4]);
        }

        let limb_shift = shift / 64;
        let bit_shift = (shift % 64) as u32;

        let mut tmp = [0u64; 4];
        tmp[..(4 - limb_shift)].copy_from_slice(&self.0[limb_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u64; 4];

        for i in 0..4 {
            let mut limb = tmp[i] << bit_shift;

            // Bits leaving the top of the next limb enter this one.
            if i + 1 < 4 {
                limb |= tmp[i + 1] >> (64 - bit_shift);
            }

            out[i] = limb;
        }

        U256(out)
    }
}

/// Logical right shift (`>>`) by a bit count.
///
/// The top of the value is filled with zeros. Shifts of 256 bits or more
/// yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, rhs: u32) -> Self::Output {
        let shift = rhs as usize;

        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256([0; 4]);
        }

        let limb_shift = shift / 64;
        let bit_shift = (shift % 64) as u32;

        let mut tmp = [0u64; 4];
        tmp[limb_shift..].copy_from_slice(&self.0[..(4 - limb_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u64; 4];

        for i in 0..4 {
            let mut limb = tmp[i] >> bit_shift;

            // Bits leaving the bottom of the previous limb enter this one.
            if i > 0 {
                limb |= tmp[i - 1] << (64 - bit_shift);
            }

            out[i] = limb;
        }

        U256(out)
    }
}

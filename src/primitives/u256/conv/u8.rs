//! Conversions between `U256` and byte representations
//!
//! This module defines explicit conversions between the fixed-size `U256`
//! type and raw byte representations.
//!
//! These conversions are fundamental for:
//! - hashing and cryptographic operations
//! - interoperability with low-level APIs
//! - rendering the value in its canonical big-endian form
//!
//! All conversions use big-endian byte order and avoid implicit
//! truncation.

use crate::primitives::U256;

/// Converts a `U256` into a 32-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(value.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        let mut out = [0u64; 4];

        for (o, chunk) in out.iter_mut().zip(value.chunks_exact(8)) {
            *o = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u8`.
///
/// The conversion succeeds only if the upper 248 bits of the value are
/// zero. Otherwise, an error is returned to signal that the value does
/// not fit into a byte.
impl TryFrom<U256> for u8 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[..3].iter().any(|&l| l != 0) || value.0[3] > u64::from(u8::MAX) {
            return Err(());
        }

        Ok(value.0[3] as u8)
    }
}

/// Converts a `u8` into a `U256`.
///
/// The value is placed in the least significant bits of the 256-bit
/// integer, with all higher bits set to zero.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256([0, 0, 0, u64::from(value)])
    }
}

use fixed_uint::primitives::{FixedWidthInteger, FixedWidthIntegerError, U256};

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use core::cmp::Ordering;
use core::convert::TryFrom;
use core::str::FromStr;

fn pow2(exponent: u32) -> BigInt {
    BigInt::one() << exponent
}

#[test]
fn u256_consts() {
    assert_eq!(U256::ZERO, U256::from(0u8));
    assert_eq!(U256::ONE, U256::from(1u8));
    assert_eq!(U256::MAX, U256::from([u64::MAX; 4]));
    assert_eq!(U256::MAX, !U256::ZERO);
    assert_eq!(U256::default(), U256::ZERO);
}

#[test]
fn u256_mask_covers_all_bits() {
    let mask = BigInt::from(U256::mask());

    assert_eq!(mask, pow2(256) - 1);
    assert_eq!(U256::MAX.to_bigint(), mask);
}

#[test]
fn u256_is_in_bounds() {
    assert!(U256::is_in_bounds(&BigInt::from(0)));
    assert!(U256::is_in_bounds(&BigInt::from(1)));
    assert!(U256::is_in_bounds(&(pow2(256) - 1)));

    assert!(!U256::is_in_bounds(&BigInt::from(-1)));
    assert!(!U256::is_in_bounds(&pow2(256)));
    assert!(!U256::is_in_bounds(&-pow2(300)));
    assert!(!U256::is_in_bounds(&pow2(1000)));
}

#[test]
fn u256_new_accepts_exactly_the_bounded_range() {
    assert_eq!(U256::new(&BigInt::from(0)).unwrap(), U256::ZERO);
    assert_eq!(U256::new(&(pow2(256) - 1)).unwrap(), U256::MAX);

    assert!(matches!(
        U256::new(&BigInt::from(-1)),
        Err(FixedWidthIntegerError::OutOfBounds)
    ));
    assert!(matches!(
        U256::new(&pow2(256)),
        Err(FixedWidthIntegerError::OutOfBounds)
    ));
}

#[test]
fn u256_new_round_trips_through_bigint() {
    let values = [
        BigInt::from(0),
        BigInt::from(1),
        BigInt::from(0xDEAD_BEEFu32),
        pow2(64),
        pow2(128) + 17,
        pow2(255),
        pow2(256) - 1,
    ];

    for value in values {
        let int = U256::new(&value).unwrap();
        assert_eq!(int.to_bigint(), value);
    }
}

#[test]
fn u256_try_from_bigint_matches_new() {
    let value = pow2(200) + 3;

    assert_eq!(U256::try_from(&value).unwrap(), U256::new(&value).unwrap());
    assert_eq!(
        U256::try_from(value.clone()).unwrap(),
        U256::new(&value).unwrap()
    );
    assert!(U256::try_from(pow2(256)).is_err());

    assert_eq!(BigInt::from(U256::ONE), BigInt::from(1));
    assert_eq!(BigUint::from(U256::ONE), BigUint::from(1u8));
}

#[test]
fn u256_from_str_decimal() {
    assert_eq!(U256::from_str("0").unwrap(), U256::ZERO);
    assert_eq!(U256::from_str("1").unwrap(), U256::ONE);
    assert_eq!(
        "340282366920938463463374607431768211456".parse::<U256>().unwrap(),
        U256::ONE << 128,
    );
    assert_eq!(
        // 2^256 - 1
        "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            .parse::<U256>()
            .unwrap(),
        U256::MAX,
    );

    assert!(matches!(
        // 2^256
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            .parse::<U256>(),
        Err(FixedWidthIntegerError::OutOfBounds)
    ));
    assert!(matches!(
        "-5".parse::<U256>(),
        Err(FixedWidthIntegerError::OutOfBounds)
    ));
    assert!(matches!(
        "not a number".parse::<U256>(),
        Err(FixedWidthIntegerError::InvalidNumeral)
    ));
    assert!(matches!(
        "".parse::<U256>(),
        Err(FixedWidthIntegerError::InvalidNumeral)
    ));
}

#[test]
fn u256_complement_involution_and_disjointness() {
    let values = [
        U256::ZERO,
        U256::ONE,
        U256::MAX,
        U256::from(0xDEAD_BEEFu32),
        U256::ONE << 200,
    ];

    for value in values {
        assert_eq!(!!value, value);
        assert_eq!(value & !value, U256::ZERO);
        assert_eq!(value | !value, U256::MAX);
    }
}

#[test]
fn u256_and_or_identities() {
    let value = U256::from(0x0123_4567_89AB_CDEFu64) | (U256::ONE << 177);

    assert_eq!(value & U256::ZERO, U256::ZERO);
    assert_eq!(value & U256::MAX, value);
    assert_eq!(value & value, value);

    assert_eq!(value | U256::ZERO, value);
    assert_eq!(value | U256::MAX, U256::MAX);
    assert_eq!(value | value, value);
}

#[test]
fn u256_xor_identities() {
    let value = U256::from(0xFEED_FACEu32) | (U256::ONE << 93);

    assert_eq!(value ^ value, U256::ZERO);
    assert_eq!(value ^ U256::ZERO, value);
    assert_eq!(value ^ U256::MAX, !value);
}

#[test]
fn u256_small_value_bitwise_scenario() {
    let five = U256::from(5u8);
    let three = U256::from(3u8);

    assert_eq!((five & three).to_bigint(), BigInt::from(1));
    assert_eq!((five | three).to_bigint(), BigInt::from(7));
    assert_eq!((five ^ three).to_bigint(), BigInt::from(6));
}

#[test]
fn u256_shl_every_position() {
    for b in 0..256u32 {
        assert_eq!((U256::ONE << b).to_bigint(), pow2(b));
    }
}

#[test]
fn u256_shl_discards_bits_beyond_the_width() {
    assert_eq!(U256::ONE << 256, U256::ZERO);
    assert_eq!(U256::MAX << 256, U256::ZERO);
    assert_eq!(U256::MAX << 300, U256::ZERO);

    // The top bit falls off, the rest survives.
    assert_eq!((U256::MAX << 1).to_bigint(), pow2(256) - 2);
}

#[test]
fn u256_shr_zero_fills_from_the_top() {
    for b in [0u32, 1, 63, 64, 65, 127, 128, 129, 255] {
        assert_eq!((U256::MAX >> b).to_bigint(), pow2(256 - b) - 1);
    }

    assert_eq!(U256::MAX >> 256, U256::ZERO);
    assert_eq!(U256::MAX >> 300, U256::ZERO);
    assert_eq!(U256::ONE >> 1, U256::ZERO);
}

#[test]
fn u256_shift_by_zero_is_identity() {
    let value = U256::from(0xABCD_EF01_2345_6789u64) | (U256::ONE << 140);

    assert_eq!(value << 0, value);
    assert_eq!(value >> 0, value);
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::MAX.leading_zeros(), 0);

    for b in 0..256u32 {
        assert_eq!((U256::MAX >> b).leading_zeros(), b);
    }
}

#[test]
fn u256_trailing_zeros() {
    assert_eq!(U256::ZERO.trailing_zeros(), 256);
    assert_eq!(U256::ONE.trailing_zeros(), 0);
    assert_eq!(U256::MAX.trailing_zeros(), 0);

    for b in 0..256u32 {
        assert_eq!((U256::ONE << b).trailing_zeros(), b);
    }
}

#[test]
fn u256_ordering_is_trichotomous() {
    let pairs = [
        (U256::ZERO, U256::ONE),
        (U256::ONE, U256::ONE),
        (U256::MAX, U256::ONE),
        (U256::ONE << 64, U256::from(u64::MAX)),
        (U256::ONE << 128, U256::ONE << 129),
    ];

    for (a, b) in pairs {
        let holds = [a < b, a == b, a > b];
        assert_eq!(holds.iter().filter(|&&h| h).count(), 1);

        assert_eq!(a >= b, a > b || a == b);
        assert_eq!(a <= b, a < b || a == b);
        assert_eq!(a != b, !(a == b));

        match a.cmp(&b) {
            Ordering::Less => assert!(a.to_bigint() < b.to_bigint()),
            Ordering::Equal => assert!(a.to_bigint() == b.to_bigint()),
            Ordering::Greater => assert!(a.to_bigint() > b.to_bigint()),
        }
    }
}

#[test]
fn u256_try_from_small_ints_and_back() {
    let a = U256::from(0x12u8);
    assert_eq!(u8::try_from(a).unwrap(), 0x12u8);

    let bad = U256::from([1u64; 4]);
    assert!(u8::try_from(bad).is_err());
    assert!(u8::try_from(U256::from(256u16)).is_err());

    let a = U256::from(0x1234u16);
    assert_eq!(u16::try_from(a).unwrap(), 0x1234u16);
    assert!(u16::try_from(U256::ONE << 16).is_err());

    let a = U256::from(0xDEADBEEFu32);
    assert_eq!(u32::try_from(a).unwrap(), 0xDEADBEEFu32);
    assert!(u32::try_from(U256::ONE << 32).is_err());

    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);
    assert!(u64::try_from(U256::ONE << 64).is_err());

    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );
    assert!(u128::try_from(U256::ONE << 128).is_err());

    let val: usize = if usize::BITS == 64 {
        0x0123_4567_89AB_CDEFusize
    } else {
        0x89AB_CDEFusize
    };
    let a = U256::from(val);
    assert_eq!(usize::try_from(a).unwrap(), val);
    assert!(usize::try_from(U256::ONE << 64).is_err());
}

#[test]
fn u256_array_conversions_round_trip() {
    let value = U256::from([1u64, 2, 3, 4]);

    let limbs: [u64; 4] = value.into();
    assert_eq!(U256::from(limbs), value);
    assert_eq!(value.as_ref(), &[1u64, 2, 3, 4]);

    let bytes: [u8; 32] = value.into();
    assert_eq!(bytes[7], 1);
    assert_eq!(bytes[31], 4);
    assert_eq!(U256::from(bytes), value);

    let halves: [u128; 2] = value.into();
    assert_eq!(halves[0], (1u128 << 64) | 2);
    assert_eq!(halves[1], (3u128 << 64) | 4);
    assert_eq!(U256::from(halves), value);
}

#[test]
fn u256_display_and_binary() {
    let formatted = format!("{}", U256::ONE);
    assert_eq!(formatted.len(), 32 * 3 - 1);
    assert!(formatted.starts_with("00:"));
    assert!(formatted.ends_with(":01"));

    let bits = format!("{:b}", U256::ONE << 2);
    assert_eq!(bits.len(), 256);
    assert!(bits.ends_with("100"));
    assert_eq!(bits.matches('1').count(), 1);

    assert_eq!(format!("{:b}", U256::ZERO), "0".repeat(256));
    assert_eq!(format!("{:b}", U256::MAX), "1".repeat(256));
}

#[test]
fn u256_implements_the_fixed_width_capability_set() {
    fn significant_bits<T: FixedWidthInteger>(value: T) -> u32 {
        T::WIDTH - value.leading_zeros()
    }

    assert_eq!(significant_bits(U256::ZERO), 0);
    assert_eq!(significant_bits(U256::ONE), 1);
    assert_eq!(significant_bits(U256::ONE << 100), 101);
    assert_eq!(significant_bits(U256::MAX), 256);

    fn round_trips<T: FixedWidthInteger>(value: &BigInt) -> bool {
        match T::new(value) {
            Ok(int) => int.to_bigint() == *value,
            Err(_) => !T::is_in_bounds(value),
        }
    }

    assert!(round_trips::<U256>(&BigInt::from(42)));
    assert!(round_trips::<U256>(&BigInt::from(-42)));
    assert!(round_trips::<U256>(&pow2(256)));
}

// ============================================================================
// Property Tests
// Arithmetic laws checked across all three storage widths
// ============================================================================

use super::*;
use crate::interfaces::FixedNum;
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};

type Q16 = FixedI16<8>;
type Q32 = FixedI32<8>;
type Q64 = FixedI64<32>;

fn additive_laws<T: FixedNum>(x: T, zero: T) -> bool {
    x + zero == x && x + (zero - x) == zero
}

fn frac_part_in_range<T: FixedNum>(x: T) -> bool {
    let frac = x.frac_part();
    frac >= T::ZERO && frac < T::ONE
}

fn abs_non_negative<T: FixedNum>(x: T) -> bool {
    x == T::MIN || x.abs() >= T::ZERO
}

macro_rules! width_properties {
    ($module:ident, $ty:ty, $raw:ty) => {
        mod $module {
            use super::*;

            const INT_LIMIT: $raw = 1 << (<$ty>::INT_BITS - 1);

            proptest! {
                #[test]
                fn int_round_trip(i in -INT_LIMIT..INT_LIMIT) {
                    prop_assert_eq!(<$ty>::from_int(i).to_int(), i);
                }

                #[test]
                fn additive_identity_and_inverse(raw in any::<$raw>()) {
                    prop_assert!(additive_laws(<$ty>::from_raw(raw), <$ty>::from_int(0)));
                }

                #[test]
                fn multiplicative_identity(raw in any::<$raw>()) {
                    let x = <$ty>::from_raw(raw);
                    prop_assert_eq!(x * <$ty>::ONE, x);
                    prop_assert_eq!(<$ty>::ONE * x, x);
                }

                #[test]
                fn divide_by_one(raw in any::<$raw>()) {
                    let x = <$ty>::from_raw(raw);
                    prop_assert_eq!(x / <$ty>::ONE, x);
                }

                #[test]
                fn frac_part_bounds(raw in any::<$raw>()) {
                    prop_assert!(frac_part_in_range(<$ty>::from_raw(raw)));
                }

                #[test]
                fn frac_plus_floor_reconstructs(raw in any::<$raw>()) {
                    let x = <$ty>::from_raw(raw);
                    let floor = <$ty>::from_int(x.to_int());
                    prop_assert_eq!(floor + x.frac_part(), x);
                }

                #[test]
                fn abs_is_non_negative(raw in any::<$raw>()) {
                    prop_assert!(abs_non_negative(<$ty>::from_raw(raw)));
                }

                #[test]
                fn add_matches_wrapping_raw(a in any::<$raw>(), b in any::<$raw>()) {
                    let sum = <$ty>::from_raw(a) + <$ty>::from_raw(b);
                    prop_assert_eq!(sum.to_raw(), a.wrapping_add(b));
                }

                #[test]
                fn checked_agrees_with_wrapping(a in any::<$raw>(), b in any::<$raw>()) {
                    let (x, y) = (<$ty>::from_raw(a), <$ty>::from_raw(b));
                    if let Ok(sum) = x.checked_add(y) {
                        prop_assert_eq!(sum, x + y);
                    }
                    if let Ok(product) = x.checked_mul(y) {
                        prop_assert_eq!(product, x * y);
                    }
                    if let Ok(quotient) = x.checked_div(y) {
                        prop_assert_eq!(quotient, x / y);
                    }
                }

                #[test]
                fn saturating_stays_ordered(a in any::<$raw>(), b in any::<$raw>()) {
                    let (x, y) = (<$ty>::from_raw(a), <$ty>::from_raw(b));
                    let sum = x.saturating_add(y);
                    if y >= <$ty>::ZERO {
                        prop_assert!(sum >= x);
                    } else {
                        prop_assert!(sum <= x);
                    }
                }

                #[test]
                fn ordering_follows_raw(a in any::<$raw>(), b in any::<$raw>()) {
                    prop_assert_eq!(<$ty>::from_raw(a).cmp(&<$ty>::from_raw(b)), a.cmp(&b));
                }
            }
        }
    };
}

width_properties!(width_16, Q16, i16);
width_properties!(width_32, Q32, i32);
width_properties!(width_64, Q64, i64);

// ============================================================================
// Multiply/divide near-inverse
// ============================================================================
//
// With |y| >= 1 and an in-range product, div(mul(x, y), y) is within one raw
// unit of x: the multiply floors (< 1 unit lost, scaled down by |y|) and the
// divide truncates toward zero (< 1 unit).

proptest! {
    #[test]
    fn mul_div_near_inverse_32(
        x in -256_000i32..256_000,
        y in 256i32..256_000,
        negate in any::<bool>(),
    ) {
        let x = Q32::from_raw(x);
        let y = Q32::from_raw(if negate { -y } else { y });
        let back = (x * y) / y;
        prop_assert!((back.to_raw() - x.to_raw()).abs() <= 1);
    }

    #[test]
    fn mul_div_near_inverse_64(
        x in -(1i64 << 40)..(1i64 << 40),
        y in (1i64 << 32)..(1i64 << 44),
        negate in any::<bool>(),
    ) {
        let x = Q64::from_raw(x);
        let y = Q64::from_raw(if negate { -y } else { y });
        let back = (x * y) / y;
        prop_assert!((back.to_raw() - x.to_raw()).abs() <= 1);
    }

    #[test]
    fn div_truncates_toward_zero(a in -1000i32..1000, b in 1i32..100) {
        let q = Q32::from_int(a) / Q32::from_int(b);
        let exact = f64::from(a) / f64::from(b) * 256.0;
        prop_assert_eq!(q.to_raw(), exact.trunc() as i32);
    }

    #[test]
    fn from_real_rounds_to_nearest(r in -1.0e6f64..1.0e6) {
        let x = Q32::from_real(r);
        let error = (x.to_f64() - r).abs();
        prop_assert!(error <= 0.5 / 256.0);
    }
}

// ============================================================================
// QuickCheck
// ============================================================================

#[test]
fn quickcheck_to_int_floors() {
    fn prop(raw: i32) -> bool {
        let x = Q32::from_raw(raw);
        i64::from(x.to_int()) == (f64::from(raw) / 256.0).floor() as i64
    }
    quickcheck(prop as fn(i32) -> bool);
}

#[test]
fn quickcheck_negation_is_involutive() {
    fn prop(raw: i64) -> bool {
        let x = Q64::from_raw(raw);
        -(-x) == x
    }
    quickcheck(prop as fn(i64) -> bool);
}

#[test]
fn quickcheck_widening_preserves_value() {
    fn prop(raw: i16) -> bool {
        let x = Q16::from_raw(raw);
        let wide: FixedI32<8> = x.into();
        let wider: FixedI64<8> = x.into();
        wide.to_f64() == x.to_f64() && wider.to_f64() == x.to_f64()
    }
    quickcheck(prop as fn(i16) -> bool);
}

#[test]
fn quickcheck_checked_div_zero() {
    fn prop(raw: i32) -> TestResult {
        let result = Q32::from_raw(raw).checked_div(Q32::ZERO);
        TestResult::from_bool(result == Err(NumericError::DivisionByZero))
    }
    quickcheck(prop as fn(i32) -> TestResult);
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn scenario_24_8() {
    let pi = Q24_8::from_real(3.14159265);
    assert_eq!(pi.to_raw(), 804);
    assert_eq!(pi.to_int(), 3);

    let product = Q24_8::from_int(2) * Q24_8::from_real(1.5);
    assert_eq!(product.to_raw(), Q24_8::from_int(3).to_raw());
    assert_eq!(product.to_raw(), 768);

    let quotient = Q24_8::from_int(7) / Q24_8::from_int(2);
    assert_eq!(quotient.to_raw(), 896);
    assert_eq!(quotient.to_int(), 3);

    // Division truncates toward zero, to_int toward negative infinity
    let negative = Q24_8::from_int(-7) / Q24_8::from_int(2);
    assert_eq!(negative, Q24_8::from_real(-3.5));
    assert_eq!(Q24_8::from_int(-1).to_int(), -1);
    assert_eq!(negative.to_int(), -4);
}

#[test]
fn scenario_narrow_multiply_would_lose_bits() {
    // 1000 * 1000 fits 24.8, but the raw product 256000 * 256000 does not fit i32
    let thousand = Q24_8::from_int(1000);
    assert_eq!((thousand * thousand).to_int(), 1_000_000);
    assert!(256_000i32.checked_mul(256_000).is_none());
}

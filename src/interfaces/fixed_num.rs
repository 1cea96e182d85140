// ============================================================================
// Fixed-Point Number Interface
// Common contract implemented by every storage width
// ============================================================================

use crate::domain::FormatSpec;
use crate::numeric::{FixedI16, FixedI32, FixedI64, NumericResult};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Shared interface of `FixedI16<F>`, `FixedI32<F>` and `FixedI64<F>`.
///
/// Lets algorithms and tests be written once for every format. The
/// operator bounds follow the wrapping fast path; the checked methods
/// are the opt-in layer.
///
/// # Example
/// ```
/// use fixedpt::interfaces::FixedNum;
/// use fixedpt::numeric::{FixedI16, FixedI64};
///
/// fn circumference<T: FixedNum>(radius: T) -> T {
///     T::TWO_PI * radius
/// }
///
/// assert_eq!(circumference(FixedI16::<8>::ONE), FixedI16::<8>::TWO_PI);
/// assert_eq!(circumference(FixedI64::<32>::ONE).to_int(), 6);
/// ```
pub trait FixedNum:
    Copy
    + Default
    + Debug
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Underlying signed storage integer
    type Raw: Copy + Ord + Hash + Debug + Send + Sync + 'static;

    const TOTAL_BITS: u32;
    const FRAC_BITS: u32;
    const INT_BITS: u32;

    const ZERO: Self;
    const ONE: Self;
    const DELTA: Self;
    const MAX: Self;
    const MIN: Self;
    const PI: Self;
    const TWO_PI: Self;
    const HALF_PI: Self;
    const E: Self;

    fn from_raw(raw: Self::Raw) -> Self;
    fn to_raw(self) -> Self::Raw;
    fn from_real(value: f64) -> Self;
    fn from_int(value: Self::Raw) -> Self;
    fn to_int(self) -> Self::Raw;
    fn frac_part(self) -> Self;
    fn abs(self) -> Self;
    fn to_f64(self) -> f64;

    // Opt-in layer: every checked and saturating entry point of the
    // concrete types, so generic code can stay on it end to end.
    fn checked_from_int(value: Self::Raw) -> NumericResult<Self>;
    fn checked_add(self, rhs: Self) -> NumericResult<Self>;
    fn checked_sub(self, rhs: Self) -> NumericResult<Self>;
    fn checked_mul(self, rhs: Self) -> NumericResult<Self>;
    fn checked_div(self, rhs: Self) -> NumericResult<Self>;
    fn checked_neg(self) -> NumericResult<Self>;
    fn checked_abs(self) -> NumericResult<Self>;
    fn saturating_add(self, rhs: Self) -> Self;
    fn saturating_sub(self, rhs: Self) -> Self;
    fn saturating_mul(self, rhs: Self) -> Self;
    /// # Panics
    /// Panics if `rhs` is zero.
    fn saturating_div(self, rhs: Self) -> Self;

    /// Describe this format for configuration checks and persistence.
    fn format() -> FormatSpec {
        FormatSpec::describe(Self::TOTAL_BITS, Self::FRAC_BITS)
    }
}

macro_rules! impl_fixed_num {
    ($name:ident, $raw:ty) => {
        impl<const F: u32> FixedNum for $name<F> {
            type Raw = $raw;

            const TOTAL_BITS: u32 = $name::<F>::TOTAL_BITS;
            const FRAC_BITS: u32 = $name::<F>::FRAC_BITS;
            const INT_BITS: u32 = $name::<F>::INT_BITS;

            const ZERO: Self = $name::<F>::ZERO;
            const ONE: Self = $name::<F>::ONE;
            const DELTA: Self = $name::<F>::DELTA;
            const MAX: Self = $name::<F>::MAX;
            const MIN: Self = $name::<F>::MIN;
            const PI: Self = $name::<F>::PI;
            const TWO_PI: Self = $name::<F>::TWO_PI;
            const HALF_PI: Self = $name::<F>::HALF_PI;
            const E: Self = $name::<F>::E;

            #[inline]
            fn from_raw(raw: $raw) -> Self {
                $name::<F>::from_raw(raw)
            }

            #[inline]
            fn to_raw(self) -> $raw {
                $name::<F>::to_raw(self)
            }

            #[inline]
            fn from_real(value: f64) -> Self {
                $name::<F>::from_real(value)
            }

            #[inline]
            fn from_int(value: $raw) -> Self {
                $name::<F>::from_int(value)
            }

            #[inline]
            fn to_int(self) -> $raw {
                $name::<F>::to_int(self)
            }

            #[inline]
            fn frac_part(self) -> Self {
                $name::<F>::frac_part(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $name::<F>::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                $name::<F>::to_f64(self)
            }

            #[inline]
            fn checked_from_int(value: $raw) -> NumericResult<Self> {
                $name::<F>::checked_from_int(value)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> NumericResult<Self> {
                $name::<F>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
                $name::<F>::checked_sub(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
                $name::<F>::checked_mul(self, rhs)
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> NumericResult<Self> {
                $name::<F>::checked_div(self, rhs)
            }

            #[inline]
            fn checked_neg(self) -> NumericResult<Self> {
                $name::<F>::checked_neg(self)
            }

            #[inline]
            fn checked_abs(self) -> NumericResult<Self> {
                $name::<F>::checked_abs(self)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                $name::<F>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                $name::<F>::saturating_sub(self, rhs)
            }

            #[inline]
            fn saturating_mul(self, rhs: Self) -> Self {
                $name::<F>::saturating_mul(self, rhs)
            }

            #[inline]
            fn saturating_div(self, rhs: Self) -> Self {
                $name::<F>::saturating_div(self, rhs)
            }
        }
    };
}

impl_fixed_num!(FixedI16, i16);
impl_fixed_num!(FixedI32, i32);
impl_fixed_num!(FixedI64, i64);

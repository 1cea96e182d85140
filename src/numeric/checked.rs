// ============================================================================
// Checked and Saturating Arithmetic
// Opt-in entry points that report or clamp instead of wrapping
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedI16, FixedI32, FixedI64};

macro_rules! checked_ops {
    ($name:ident, $raw:ty, $wide:ty) => {
        impl<const F: u32> $name<F> {
            /// Narrow a wide intermediate, reporting which bound was crossed.
            #[inline]
            pub(crate) fn narrow(wide: $wide) -> NumericResult<Self> {
                if wide > <$raw>::MAX as $wide {
                    Err(NumericError::Overflow)
                } else if wide < <$raw>::MIN as $wide {
                    Err(NumericError::Underflow)
                } else {
                    Ok(Self::from_raw(wide as $raw))
                }
            }

            /// Narrow a wide intermediate, clamping to `MIN`/`MAX`.
            #[inline]
            fn saturate(wide: $wide) -> Self {
                Self::narrow(wide).unwrap_or_else(|err| match err {
                    NumericError::Underflow => Self::MIN,
                    _ => Self::MAX,
                })
            }

            /// Checked integer conversion.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if `value` does not fit in `INT_BITS`.
            #[inline]
            pub fn checked_from_int(value: $raw) -> NumericResult<Self> {
                Self::narrow((value as $wide) << Self::FRAC_BITS)
            }

            /// Checked addition.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the result is out of range.
            #[inline]
            pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
                self.to_raw()
                    .checked_add(rhs.to_raw())
                    .map(Self::from_raw)
                    .ok_or_else(|| {
                        if rhs.is_positive() {
                            NumericError::Overflow
                        } else {
                            NumericError::Underflow
                        }
                    })
            }

            /// Checked subtraction.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the result is out of range.
            #[inline]
            pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
                self.to_raw()
                    .checked_sub(rhs.to_raw())
                    .map(Self::from_raw)
                    .ok_or_else(|| {
                        if rhs.is_negative() {
                            NumericError::Overflow
                        } else {
                            NumericError::Underflow
                        }
                    })
            }

            /// Checked multiplication with the same rounding as `wrapping_mul`.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the integer part of the
            /// product needs more than `INT_BITS` bits.
            #[inline]
            pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
                let product = (self.to_raw() as $wide) * (rhs.to_raw() as $wide);
                Self::narrow(product >> Self::FRAC_BITS)
            }

            /// Checked division with the same truncation as `wrapping_div`.
            ///
            /// # Errors
            /// - `DivisionByZero` if `rhs` is zero
            /// - `Overflow` or `Underflow` if the quotient is out of range
            #[doc(alias = "try_div")]
            #[inline]
            pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
                if rhs.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                let dividend = (self.to_raw() as $wide) << Self::FRAC_BITS;
                Self::narrow(dividend / rhs.to_raw() as $wide)
            }

            /// Checked negation.
            ///
            /// # Errors
            /// Returns `Overflow` for `MIN`.
            #[inline]
            pub fn checked_neg(self) -> NumericResult<Self> {
                self.to_raw()
                    .checked_neg()
                    .map(Self::from_raw)
                    .ok_or(NumericError::Overflow)
            }

            /// Checked absolute value.
            ///
            /// # Errors
            /// Returns `Overflow` for `MIN`.
            #[inline]
            pub fn checked_abs(self) -> NumericResult<Self> {
                self.to_raw()
                    .checked_abs()
                    .map(Self::from_raw)
                    .ok_or(NumericError::Overflow)
            }

            #[inline]
            pub const fn saturating_add(self, rhs: Self) -> Self {
                Self::from_raw(self.to_raw().saturating_add(rhs.to_raw()))
            }

            #[inline]
            pub const fn saturating_sub(self, rhs: Self) -> Self {
                Self::from_raw(self.to_raw().saturating_sub(rhs.to_raw()))
            }

            #[inline]
            pub fn saturating_mul(self, rhs: Self) -> Self {
                let product = (self.to_raw() as $wide) * (rhs.to_raw() as $wide);
                Self::saturate(product >> Self::FRAC_BITS)
            }

            /// Saturating division.
            ///
            /// # Panics
            /// Panics if `rhs` is zero, like the integer `saturating_div`.
            #[inline]
            pub fn saturating_div(self, rhs: Self) -> Self {
                let dividend = (self.to_raw() as $wide) << Self::FRAC_BITS;
                Self::saturate(dividend / rhs.to_raw() as $wide)
            }
        }
    };
}

checked_ops!(FixedI16, i16, i32);
checked_ops!(FixedI32, i32, i64);
checked_ops!(FixedI64, i64, i128);

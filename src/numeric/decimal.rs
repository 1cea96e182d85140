// ============================================================================
// Conversion to and from rust_decimal (for API boundaries)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedI16, FixedI32, FixedI64};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

macro_rules! decimal_conversions {
    ($name:ident, $raw:ty) => {
        impl<const F: u32> $name<F> {
            /// Scale factor `2^F` as a Decimal. Exact for every supported `F`.
            #[inline]
            fn decimal_scale() -> Decimal {
                Decimal::from(1u64 << Self::FRAC_BITS)
            }

            /// Convert to rust_decimal::Decimal.
            ///
            /// Intended for display and API boundaries. Exact whenever
            /// `raw / 2^F` fits in Decimal's 28 significant digits; otherwise
            /// rounded by Decimal's division.
            pub fn to_decimal(self) -> Decimal {
                Decimal::from(self.to_raw()) / Self::decimal_scale()
            }

            /// Convert from rust_decimal::Decimal without rounding.
            ///
            /// # Errors
            /// - `PrecisionLoss` if `d` is not a multiple of `2^-F`
            /// - `Overflow` or `Underflow` if the value is out of range
            pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
                let scaled = Self::scale_decimal(d)?;
                if !scaled.fract().is_zero() {
                    tracing::debug!(
                        value = %d,
                        frac_bits = F,
                        "rejecting decimal with bits below format resolution"
                    );
                    return Err(NumericError::PrecisionLoss);
                }
                Self::decimal_to_raw(scaled)
            }

            /// Convert from rust_decimal::Decimal, rounding half away from zero
            /// like `from_real`.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` if the value is out of range.
            pub fn from_decimal_rounded(d: Decimal) -> NumericResult<Self> {
                let scaled = Self::scale_decimal(d)?
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                Self::decimal_to_raw(scaled)
            }

            fn scale_decimal(d: Decimal) -> NumericResult<Decimal> {
                d.checked_mul(Self::decimal_scale()).ok_or_else(|| {
                    tracing::debug!(value = %d, frac_bits = F, "decimal scaling overflowed");
                    if d.is_sign_negative() {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    }
                })
            }

            fn decimal_to_raw(scaled: Decimal) -> NumericResult<Self> {
                match scaled.to_i128() {
                    Some(wide) if wide > <$raw>::MAX as i128 => Err(NumericError::Overflow),
                    Some(wide) if wide < <$raw>::MIN as i128 => Err(NumericError::Underflow),
                    Some(wide) => Ok(Self::from_raw(wide as $raw)),
                    None if scaled.is_sign_negative() => Err(NumericError::Underflow),
                    None => Err(NumericError::Overflow),
                }
            }
        }
    };
}

decimal_conversions!(FixedI16, i16);
decimal_conversions!(FixedI32, i32);
decimal_conversions!(FixedI64, i64);

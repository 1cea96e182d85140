// ============================================================================
// Format Conversions
// Moving values between fraction counts and storage widths
// ============================================================================
//
// Values of different formats never mix implicitly. These are the explicit
// bridges: same-width rescaling between fraction counts, and width changes
// that keep the fraction count.

use super::errors::{NumericError, NumericResult};
use super::fixed_point::{FixedI16, FixedI32, FixedI64};

macro_rules! rescale_ops {
    ($name:ident, $raw:ty, $wide:ty) => {
        impl<const F: u32> $name<F> {
            /// Reinterpret with `G` fractional bits.
            ///
            /// Gaining bits shifts left and wraps if the integer part no longer
            /// fits; dropping bits shifts right arithmetically (toward negative
            /// infinity, like `to_int`).
            #[inline]
            pub const fn rescale<const G: u32>(self) -> $name<G> {
                let from = Self::FRAC_BITS;
                let to = $name::<G>::FRAC_BITS;
                let raw = if to >= from {
                    ((self.to_raw() as $wide) << (to - from)) as $raw
                } else {
                    self.to_raw() >> (from - to)
                };
                $name::<G>::from_raw(raw)
            }

            /// Like `rescale`, but reports values whose integer part does not fit.
            ///
            /// # Errors
            /// Returns `Overflow` or `Underflow` when gaining fractional bits
            /// pushes the value out of range.
            #[inline]
            pub fn checked_rescale<const G: u32>(self) -> NumericResult<$name<G>> {
                let from = Self::FRAC_BITS;
                let to = $name::<G>::FRAC_BITS;
                if to >= from {
                    $name::<G>::narrow((self.to_raw() as $wide) << (to - from))
                } else {
                    Ok($name::<G>::from_raw(self.to_raw() >> (from - to)))
                }
            }
        }
    };
}

rescale_ops!(FixedI16, i16, i32);
rescale_ops!(FixedI32, i32, i64);
rescale_ops!(FixedI64, i64, i128);

/// Lossless widening: same fraction count, more integer bits.
macro_rules! widen {
    ($narrow:ident => $wider:ident, $raw:ty) => {
        impl<const F: u32> From<$narrow<F>> for $wider<F> {
            #[inline]
            fn from(value: $narrow<F>) -> Self {
                $wider::from_raw(<$raw>::from(value.to_raw()))
            }
        }
    };
}

widen!(FixedI16 => FixedI32, i32);
widen!(FixedI16 => FixedI64, i64);
widen!(FixedI32 => FixedI64, i64);

/// Narrowing keeps the fraction count and rejects values that do not fit.
macro_rules! narrow_to {
    ($wider:ident => $narrow:ident, $raw:ty) => {
        impl<const F: u32> TryFrom<$wider<F>> for $narrow<F> {
            type Error = NumericError;

            #[inline]
            fn try_from(value: $wider<F>) -> NumericResult<Self> {
                let raw = value.to_raw();
                match <$raw>::try_from(raw) {
                    Ok(narrowed) => Ok($narrow::from_raw(narrowed)),
                    Err(_) if raw > 0 => Err(NumericError::Overflow),
                    Err(_) => Err(NumericError::Underflow),
                }
            }
        }
    };
}

narrow_to!(FixedI32 => FixedI16, i16);
narrow_to!(FixedI64 => FixedI16, i16);
narrow_to!(FixedI64 => FixedI32, i32);

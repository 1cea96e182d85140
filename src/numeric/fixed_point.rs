// ============================================================================
// Binary Fixed-Point Types
// Scaled signed integers with compile-time width and fractional bits
// ============================================================================

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Generates one fixed-point type over a signed storage integer.
///
/// `$raw` is the `W`-bit storage, `$wide` the `2W`-bit intermediate used by
/// multiplication, division and integer conversion.
macro_rules! fixed_point_type {
    ($(#[$attr:meta])* $name:ident, $raw:ty, $wide:ty) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)]
        pub struct $name<const F: u32>($raw);

        impl<const F: u32> $name<F> {
            /// Bits of underlying storage (`W`).
            pub const TOTAL_BITS: u32 = <$raw>::BITS;

            /// Bits below the binary point (`F`).
            ///
            /// Evaluating this constant rejects formats outside `0 < F < W`
            /// at compile time. [`from_raw`](Self::from_raw) carries the same
            /// check for code paths that never touch the shift amount.
            pub const FRAC_BITS: u32 = {
                assert!(
                    F > 0 && F < <$raw>::BITS,
                    "fractional bits must satisfy 0 < F < total bits"
                );
                F
            };

            /// Bits above the binary point, sign included (`W - F`).
            pub const INT_BITS: u32 = Self::TOTAL_BITS - Self::FRAC_BITS;

            /// Scale factor `2^F` in the wide domain.
            const SCALE: $wide = (1 as $wide) << Self::FRAC_BITS;

            /// Mask selecting the fractional bits of a raw value.
            pub const FRAC_MASK: $raw = (Self::SCALE - 1) as $raw;

            // ========================================================================
            // Construction
            // ========================================================================

            /// Wrap an already scaled raw value.
            ///
            /// Every value of the type is built here, so a format outside
            /// `0 < F < W` fails to build as soon as any value of it exists:
            ///
            /// ```compile_fail
            /// use fixedpt::numeric::FixedI32;
            ///
            /// let _ = FixedI32::<0>::from_raw(1);
            /// ```
            ///
            /// ```compile_fail
            /// use fixedpt::numeric::FixedI16;
            ///
            /// let _ = FixedI16::<16>::default();
            /// ```
            #[inline]
            pub const fn from_raw(raw: $raw) -> Self {
                const {
                    assert!(
                        F > 0 && F < <$raw>::BITS,
                        "fractional bits must satisfy 0 < F < total bits"
                    )
                };
                Self(raw)
            }

            /// Scale a real constant by `2^F`, rounding half away from zero.
            ///
            /// Meant for literals and constants; it is a `const fn` so the
            /// conversion happens at compile time when used in a `const`.
            /// Values outside the representable range saturate in the wide
            /// domain and then wrap when narrowed.
            ///
            /// ```
            /// use fixedpt::numeric::Q24_8;
            ///
            /// const PI_ISH: Q24_8 = Q24_8::from_real(3.14159265);
            /// assert_eq!(PI_ISH.to_raw(), 804);
            /// ```
            #[inline]
            pub const fn from_real(value: f64) -> Self {
                let scaled = value * Self::SCALE as f64;
                let rounded = if value >= 0.0 {
                    scaled + 0.5
                } else {
                    scaled - 0.5
                };
                Self::from_raw(rounded as $wide as $raw)
            }

            /// Shift an integer up by `F` bits.
            ///
            /// Exact, never rounds. Integers whose magnitude needs more than
            /// `INT_BITS` bits wrap silently; use `checked_from_int` to detect that.
            #[inline]
            pub const fn from_int(value: $raw) -> Self {
                Self::from_raw(((value as $wide) << Self::FRAC_BITS) as $raw)
            }

            // ========================================================================
            // Accessors
            // ========================================================================

            /// The raw scaled integer.
            #[inline]
            pub const fn to_raw(self) -> $raw {
                self.0
            }

            /// Integer part by arithmetic shift.
            ///
            /// Rounds toward negative infinity: `-0.5` becomes `-1`, not `0`.
            /// Division rounds toward zero instead; both behaviours are kept as is.
            #[inline]
            pub const fn to_int(self) -> $raw {
                self.0 >> Self::FRAC_BITS
            }

            /// The low `F` bits as a value in `[0, 1)`, whatever the sign.
            #[inline]
            pub const fn frac_part(self) -> Self {
                Self::from_raw(self.0 & Self::FRAC_MASK)
            }

            /// Lossy conversion for diagnostics. Never used by arithmetic.
            #[inline]
            pub fn to_f64(self) -> f64 {
                self.0 as f64 / Self::SCALE as f64
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }

            #[inline]
            pub const fn is_positive(self) -> bool {
                self.0 > 0
            }

            #[inline]
            pub const fn is_negative(self) -> bool {
                self.0 < 0
            }

            // ========================================================================
            // Arithmetic (wrapping fast path)
            // ========================================================================

            /// Two's-complement addition at native width.
            #[inline]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                Self::from_raw(self.0.wrapping_add(rhs.0))
            }

            /// Two's-complement subtraction at native width.
            #[inline]
            pub const fn wrapping_sub(self, rhs: Self) -> Self {
                Self::from_raw(self.0.wrapping_sub(rhs.0))
            }

            /// Multiply in the double-width domain, shift right by `F`, narrow.
            ///
            /// The shift is arithmetic, so the product rounds toward negative
            /// infinity. The wide product of two `W`-bit values cannot overflow;
            /// only the final narrowing can drop high bits.
            #[doc(alias = "xmul")]
            #[inline]
            pub const fn wrapping_mul(self, rhs: Self) -> Self {
                let product = (self.0 as $wide) * (rhs.0 as $wide);
                Self::from_raw((product >> Self::FRAC_BITS) as $raw)
            }

            /// Shift the dividend up by `F` in the double-width domain, then
            /// divide, truncating toward zero, and narrow.
            ///
            /// # Panics
            /// Panics if `rhs` is zero.
            #[inline]
            pub const fn wrapping_div(self, rhs: Self) -> Self {
                let dividend = (self.0 as $wide) << Self::FRAC_BITS;
                Self::from_raw((dividend / rhs.0 as $wide) as $raw)
            }

            /// Absolute value. `MIN` has no positive counterpart and maps to itself.
            #[inline]
            pub const fn abs(self) -> Self {
                Self::from_raw(self.0.wrapping_abs())
            }

            /// Negation. `MIN` maps to itself.
            #[inline]
            pub const fn wrapping_neg(self) -> Self {
                Self::from_raw(self.0.wrapping_neg())
            }

            /// Returns the minimum of two values.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self::from_raw(self.0.min(other.0))
            }

            /// Returns the maximum of two values.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self::from_raw(self.0.max(other.0))
            }
        }

        // ============================================================================
        // Operator Traits
        // ============================================================================

        impl<const F: u32> Add for $name<F> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                self.wrapping_add(rhs)
            }
        }

        impl<const F: u32> Sub for $name<F> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                self.wrapping_sub(rhs)
            }
        }

        impl<const F: u32> Mul for $name<F> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                self.wrapping_mul(rhs)
            }
        }

        impl<const F: u32> Div for $name<F> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self::Output {
                self.wrapping_div(rhs)
            }
        }

        impl<const F: u32> Neg for $name<F> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                self.wrapping_neg()
            }
        }

        impl<const F: u32> AddAssign for $name<F> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = self.wrapping_add(rhs);
            }
        }

        impl<const F: u32> SubAssign for $name<F> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.wrapping_sub(rhs);
            }
        }

        impl<const F: u32> MulAssign for $name<F> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.wrapping_mul(rhs);
            }
        }

        impl<const F: u32> DivAssign for $name<F> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = self.wrapping_div(rhs);
            }
        }

        impl<const F: u32> Default for $name<F> {
            #[inline]
            fn default() -> Self {
                Self::from_raw(0)
            }
        }

        impl<const F: u32> Sum for $name<F> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::default(), Self::wrapping_add)
            }
        }

        impl<const F: u32> fmt::Debug for $name<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}<{}>(raw={}, ~{})",
                    stringify!($name),
                    F,
                    self.0,
                    self.to_f64()
                )
            }
        }
    };
}

fixed_point_type!(
    /// 16-bit fixed-point number with `F` fractional bits (`i32` intermediates).
    FixedI16,
    i16,
    i32
);

fixed_point_type!(
    /// 32-bit fixed-point number with `F` fractional bits (`i64` intermediates).
    ///
    /// Stores `value × 2^F` as an `i32`; the represented value is `raw / 2^F`.
    ///
    /// # Example
    /// ```
    /// use fixedpt::numeric::FixedI32;
    ///
    /// type Q = FixedI32<8>;
    /// let x = Q::from_int(2) * Q::from_real(1.5);
    /// assert_eq!(x, Q::from_int(3));
    /// assert_eq!(x.to_raw(), 768);
    /// ```
    FixedI32,
    i32,
    i64
);

fixed_point_type!(
    /// 64-bit fixed-point number with `F` fractional bits (`i128` intermediates).
    FixedI64,
    i64,
    i128
);

// ============================================================================
// Type Aliases for Common Formats
// ============================================================================

/// Default format: 32-bit storage, 24 fractional bits, 8 integer bits.
pub type Fixed = FixedI32<24>;

/// 32-bit storage with 8 fractional bits (24.8): range of about ±8.3 million
/// at a resolution of 1/256.
pub type Q24_8 = FixedI32<8>;

/// 16-bit storage with 8 fractional bits.
pub type Q8_8 = FixedI16<8>;

/// 64-bit storage split evenly.
pub type Q32_32 = FixedI64<32>;

// ============================================================================
// Tests
// ============================================================================

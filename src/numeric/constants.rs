// ============================================================================
// Fixed-Point Constants
// Catalogue of compile-time constants derived from the format
// ============================================================================

use super::fixed_point::{FixedI16, FixedI32, FixedI64};
use std::f64::consts::{E, PI};

macro_rules! fixed_point_constants {
    ($name:ident, $raw:ty, $wide:ty) => {
        impl<const F: u32> $name<F> {
            /// Zero
            pub const ZERO: Self = Self::from_raw(0);

            /// Smallest positive value, one raw unit (`2^-F`)
            pub const DELTA: Self = Self::from_raw(1);

            /// Largest representable value, `(2^(W-1) - 1) / 2^F`
            pub const MAX: Self = Self::from_raw(<$raw>::MAX);

            /// Most negative representable value, `-2^(W-1) / 2^F`
            pub const MIN: Self = Self::from_raw(<$raw>::MIN);

            /// One (1.0), exactly `2^F`
            pub const ONE: Self = Self::from_raw(((1 as $wide) << Self::FRAC_BITS) as $raw);

            pub const ONE_HALF: Self = Self::from_raw(Self::ONE.to_raw() >> 1);
            pub const QUARTER: Self = Self::from_raw(Self::ONE.to_raw() >> 2);
            pub const TWO: Self = Self::ONE.wrapping_add(Self::ONE);
            pub const FIVE: Self = Self::TWO.wrapping_add(Self::TWO).wrapping_add(Self::ONE);

            /// π rounded to the nearest raw unit
            pub const PI: Self = Self::from_real(PI);
            pub const TWO_PI: Self = Self::from_real(2.0 * PI);
            pub const HALF_PI: Self = Self::from_real(PI / 2.0);

            /// Euler's number rounded to the nearest raw unit
            pub const E: Self = Self::from_real(E);

            /// 1.5, exactly `3 << (F - 1)`
            pub const ONE_POINT_FIVE: Self =
                Self::from_raw(((3 as $wide) << (Self::FRAC_BITS - 1)) as $raw);

            pub const ONE_POINT_EIGHT: Self = Self::from_real(1.8);
            pub const MINUS_ONE_POINT_EIGHT: Self = Self::from_real(-1.8);
            pub const ZERO_POINT_NINE: Self = Self::from_real(0.9);
            pub const MINUS_FIVE: Self = Self::from_real(-5.0);
            pub const ONE_SIXTEENTH: Self = Self::from_real(0.0625);

            /// 1024, `1 << (F + 10)` in the wide domain; wraps when `INT_BITS <= 11`
            pub const ONE_THOUSAND_TWENTY_FOUR: Self =
                Self::from_raw(((1 as $wide) << (Self::FRAC_BITS + 10)) as $raw);
        }
    };
}

fixed_point_constants!(FixedI16, i16, i32);
fixed_point_constants!(FixedI32, i32, i64);
fixed_point_constants!(FixedI64, i64, i128);

// ============================================================================
// Fixed-Point Arithmetic Library
// Deterministic scaled-integer replacement for floating point
// ============================================================================

//! # fixedpt
//!
//! Signed binary fixed-point numbers for targets where floating point is
//! missing, slow, or not reproducible.
//!
//! ## Features
//!
//! - **Compile-time formats**: `FixedI16<F>`, `FixedI32<F>`, `FixedI64<F>` carry
//!   the storage width and fractional bit count in the type; `0 < F < W` is
//!   checked at compile time and formats never mix implicitly
//! - **Integer-only arithmetic**: multiply and divide go through a
//!   double-width intermediate, operators wrap like native integers
//! - **Constant catalogue**: `PI`, `E`, `HALF_PI`, `ONE_HALF`, ... evaluated at
//!   compile time for every format
//! - **Opt-in checking**: `checked_*` and `saturating_*` variants alongside the
//!   zero-overhead fast path
//! - **Boundary conversions**: lossless widening, rescaling between fraction
//!   counts, and `rust_decimal` interop
//!
//! ## Rounding
//!
//! `from_real` rounds half away from zero. `to_int` and multiplication round
//! toward negative infinity (arithmetic shift). Division truncates toward zero.
//!
//! ## Example
//!
//! ```rust
//! use fixedpt::prelude::*;
//!
//! type Q = FixedI32<8>;
//!
//! const RADIUS: Q = Q::from_real(1.5);
//! let area = Q::PI * RADIUS * RADIUS;
//! assert_eq!(area.to_int(), 7);
//!
//! let half = Q::from_int(7) / Q::from_int(2);
//! assert_eq!(half.to_raw(), 896);
//!
//! assert_eq!(Q::ONE.checked_div(Q::ZERO), Err(NumericError::DivisionByZero));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FormatSpec, Width};
    pub use crate::interfaces::FixedNum;
    pub use crate::numeric::{
        Fixed, FixedI16, FixedI32, FixedI64, NumericError, NumericResult, Q24_8, Q32_32, Q8_8,
    };
}

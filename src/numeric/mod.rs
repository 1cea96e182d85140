// ============================================================================
// Numeric Module
// Binary fixed-point arithmetic with compile-time width and precision
// ============================================================================
//
// This module provides:
// - FixedI16<F>, FixedI32<F>, FixedI64<F>: signed fixed-point numbers with
//   F fractional bits over 16/32/64-bit storage
// - The constant catalogue (PI, E, ONE_HALF, ...) derived from each format
// - Checked/saturating entry points and NumericError
// - Conversions between formats and to/from rust_decimal
//
// Design principles:
// - No floating-point operations at runtime in arithmetic
// - Default operators wrap like native integers; checking is opt-in
// - Multiply and divide always go through the double-width intermediate
// - Formats are part of the type, so mixing them does not compile

mod checked;
mod constants;
mod conversions;
mod decimal;
mod errors;
mod fixed_point;

#[cfg(test)]
mod tests;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{Fixed, FixedI16, FixedI32, FixedI64, Q24_8, Q32_32, Q8_8};

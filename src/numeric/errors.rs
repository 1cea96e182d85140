// ============================================================================
// Numeric Errors
// Error types for the opt-in checked fixed-point operations
// ============================================================================

use std::fmt;

/// Errors reported by the checked fixed-point entry points.
///
/// The default arithmetic path never produces these: it wraps on overflow
/// the same way native integers do. Only `checked_*` methods, the decimal
/// boundary conversions and format validation return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the largest representable raw value
    Overflow,
    /// Result below the smallest representable raw value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would drop bits below the format's resolution
    PrecisionLoss,
    /// Fractional bit count outside `1..total_bits`
    InvalidFormat { total_bits: u32, frac_bits: u32 },
    /// A described format does not match the compiled type
    FormatMismatch {
        expected_total: u32,
        expected_frac: u32,
        got_total: u32,
        got_frac: u32,
    },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => write!(
                f,
                "fixed-point overflow: result above the format's largest raw value"
            ),
            NumericError::Underflow => write!(
                f,
                "fixed-point underflow: result below the format's smallest raw value"
            ),
            NumericError::DivisionByZero => {
                write!(f, "fixed-point division with a zero raw divisor")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value has bits below the format resolution"
            ),
            NumericError::InvalidFormat {
                total_bits,
                frac_bits,
            } => write!(
                f,
                "invalid format: {} fractional bits do not fit a {}-bit value",
                frac_bits, total_bits
            ),
            NumericError::FormatMismatch {
                expected_total,
                expected_frac,
                got_total,
                got_frac,
            } => write!(
                f,
                "format mismatch: expected {}-bit with {} fractional bits, got {}-bit with {}",
                expected_total, expected_frac, got_total, got_frac
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

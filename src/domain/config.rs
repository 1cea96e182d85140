// ============================================================================
// Fixed-Point Format Configuration
// Describes and validates the (width, fractional bits) pair of a format
// ============================================================================

use crate::interfaces::FixedNum;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Storage Width
// ============================================================================

/// Total storage width of a fixed-point format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Width {
    /// `i16` storage, `i32` intermediates
    Bits16,
    /// `i32` storage, `i64` intermediates
    #[default]
    Bits32,
    /// `i64` storage, `i128` intermediates
    Bits64,
}

impl Width {
    /// Number of storage bits
    pub const fn bits(self) -> u32 {
        match self {
            Width::Bits16 => 16,
            Width::Bits32 => 32,
            Width::Bits64 => 64,
        }
    }

    /// Name of the concrete type implementing this width
    pub const fn type_name(self) -> &'static str {
        match self {
            Width::Bits16 => "FixedI16",
            Width::Bits32 => "FixedI32",
            Width::Bits64 => "FixedI64",
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = NumericError;

    fn try_from(bits: u32) -> NumericResult<Self> {
        match bits {
            16 => Ok(Width::Bits16),
            32 => Ok(Width::Bits32),
            64 => Ok(Width::Bits64),
            _ => Err(NumericError::InvalidFormat {
                total_bits: bits,
                frac_bits: 0,
            }),
        }
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.bits()
    }
}

// ============================================================================
// Format Specification
// ============================================================================

/// A `(W, F)` pair describing a fixed-point format.
///
/// Formats are fixed at compile time through the type (`FixedI32<8>` and
/// so on). A `FormatSpec` is the runtime description of one: it can be read
/// from a settings file alongside persisted raw values, validated, and
/// checked against the type the program was compiled with via
/// [`FormatSpec::ensure_matches`].
///
/// Defaults to 32-bit storage with 24 fractional bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FormatSpecRepr", into = "FormatSpecRepr")
)]
pub struct FormatSpec {
    width: Width,
    frac_bits: u32,
}

/// Unvalidated wire shape of a `FormatSpec`
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FormatSpecRepr {
    width: Width,
    frac_bits: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<FormatSpecRepr> for FormatSpec {
    type Error = NumericError;

    fn try_from(repr: FormatSpecRepr) -> NumericResult<Self> {
        Self::new(repr.width, repr.frac_bits)
    }
}

#[cfg(feature = "serde")]
impl From<FormatSpec> for FormatSpecRepr {
    fn from(spec: FormatSpec) -> Self {
        Self {
            width: spec.width,
            frac_bits: spec.frac_bits,
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            width: Width::Bits32,
            frac_bits: 24,
        }
    }
}

impl FormatSpec {
    /// Create a validated format.
    ///
    /// # Errors
    /// Returns `InvalidFormat` unless `0 < frac_bits < width.bits()`.
    pub fn new(width: Width, frac_bits: u32) -> NumericResult<Self> {
        if frac_bits == 0 || frac_bits >= width.bits() {
            tracing::warn!(
                total_bits = width.bits(),
                frac_bits,
                "rejecting fixed-point format"
            );
            return Err(NumericError::InvalidFormat {
                total_bits: width.bits(),
                frac_bits,
            });
        }
        Ok(Self { width, frac_bits })
    }

    /// Create a validated format from raw bit counts.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for unsupported widths or fraction counts.
    pub fn from_bits(total_bits: u32, frac_bits: u32) -> NumericResult<Self> {
        let width = Width::try_from(total_bits).map_err(|_| NumericError::InvalidFormat {
            total_bits,
            frac_bits,
        })?;
        Self::new(width, frac_bits)
    }

    /// Description of an already compiled format. Compile-time validation
    /// has guaranteed the pair is legal.
    pub(crate) fn describe(total_bits: u32, frac_bits: u32) -> Self {
        let width = match total_bits {
            16 => Width::Bits16,
            64 => Width::Bits64,
            _ => Width::Bits32,
        };
        Self { width, frac_bits }
    }

    /// Description of the format implemented by `T`.
    pub fn of<T: FixedNum>() -> Self {
        T::format()
    }

    /// Builder method: change the storage width, keeping the fraction count.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if the fraction count no longer fits.
    pub fn with_width(self, width: Width) -> NumericResult<Self> {
        Self::new(width, self.frac_bits)
    }

    /// Builder method: change the fraction count.
    ///
    /// # Errors
    /// Returns `InvalidFormat` unless `0 < frac_bits < W`.
    pub fn with_frac_bits(self, frac_bits: u32) -> NumericResult<Self> {
        Self::new(self.width, frac_bits)
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn total_bits(&self) -> u32 {
        self.width.bits()
    }

    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    /// Integer bits including the sign (`W - F`)
    pub fn int_bits(&self) -> u32 {
        self.width.bits() - self.frac_bits
    }

    /// Smallest representable step, `2^-F`
    pub fn resolution(&self) -> f64 {
        (-(self.frac_bits as f64)).exp2()
    }

    /// Largest representable value, approximately
    pub fn max_value(&self) -> f64 {
        ((self.int_bits() - 1) as f64).exp2() - self.resolution()
    }

    /// Most negative representable value
    pub fn min_value(&self) -> f64 {
        -((self.int_bits() - 1) as f64).exp2()
    }

    /// Verify that this description matches the compiled type `T`.
    ///
    /// Values of different formats must never be mixed; raw integers read
    /// under one description are meaningless under another.
    ///
    /// # Errors
    /// Returns `FormatMismatch` if width or fraction count differ.
    pub fn ensure_matches<T: FixedNum>(&self) -> NumericResult<()> {
        let compiled = T::format();
        if compiled == *self {
            tracing::debug!(
                total_bits = self.total_bits(),
                frac_bits = self.frac_bits,
                "fixed-point format matches compiled type"
            );
            return Ok(());
        }

        tracing::warn!(
            expected = %compiled,
            got = %self,
            "fixed-point format mismatch"
        );
        Err(NumericError::FormatMismatch {
            expected_total: compiled.total_bits(),
            expected_frac: compiled.frac_bits(),
            got_total: self.total_bits(),
            got_frac: self.frac_bits,
        })
    }
}

impl std::fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}> (Q{}.{})",
            self.width.type_name(),
            self.frac_bits,
            self.int_bits(),
            self.frac_bits
        )
    }
}

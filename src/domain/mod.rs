// ============================================================================
// Domain Module
// Runtime description and validation of fixed-point formats
// ============================================================================

pub mod config;

pub use config::{FormatSpec, Width};

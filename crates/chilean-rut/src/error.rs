//! Error types for RUT construction and generation.

use thiserror::Error;

/// Errors that can occur when building, parsing or generating a RUT.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// The numeric body is empty, has a leading zero, mixes grouping
    /// styles, or contains non-digit characters.
    #[error("invalid RUT number format: {input:?}")]
    InvalidNumberFormat { input: String },

    /// The check digit is not a single `0-9`, `k` or `K`.
    #[error("invalid RUT check digit: {input:?}")]
    InvalidCheckDigit { input: String },

    /// The random range is empty or outside `1..=99_999_999`.
    #[error("invalid RUT range: [{min}, {max})")]
    InvalidRange { min: u32, max: u32 },

    /// More distinct values were requested than the range can hold.
    #[error("cannot draw {requested} unique RUTs from a range of {available}")]
    RangeExhausted { requested: usize, available: u64 },
}

pub type Result<T> = std::result::Result<T, RutError>;

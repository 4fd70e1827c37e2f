// ============================================================================
// Numeric Errors
// Error types for fixed-point construction, conversion and aggregation
// ============================================================================

use std::fmt;

/// Errors returned by the fallible helpers around the fixed-point kernels.
///
/// The exponential kernels themselves never fail: out-of-range inputs map to
/// defined saturation values (`u64::MAX` or zero) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the 34.30 range
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Precision order outside 1..=7
    UnsupportedOrder(u8),
    /// Operation needs at least one element
    EmptyInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::UnsupportedOrder(order) => {
                write!(f, "unsupported precision order {} (expected 1..=7)", order)
            },
            NumericError::EmptyInput => write!(f, "empty input: at least one value required"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

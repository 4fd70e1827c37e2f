// ============================================================================
// Numeric Module
// Unsigned 34.30 fixed-point representation shared by the exponential kernels
// ============================================================================
//
// This module provides:
// - Fxp: 34 integer bits / 30 fractional bits over a u64
// - NumericError: Error types for construction and conversion helpers
//
// Design principles:
// - No floating-point operations
// - Decomposition x = 2^30 i + d is exact and total
// - Fallible helpers return Result (no panics)

mod errors;
mod fixed_point;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{Fxp, FRAC_BITS, INT_BITS};

// ============================================================================
// Approximation Module
// Polynomial approximations of 2^d over the fractional unit interval
//
// This module contains:
// - PrecisionOrder: cost / accuracy tier, fixed per build
// - HornerTable: immutable fitted coefficients, one per order and direction
// - Horner evaluators: ascending sum (exp2m1) and descending chain (rexp2)
// ============================================================================

mod horner;
mod precision;
mod tables;

pub use horner::{horner_difference, horner_sum};
pub use precision::{Accuracy, PrecisionOrder, FXP_ORDER};
pub use tables::{exp2m1_table, rexp2_table, HornerTable, HornerTerm};

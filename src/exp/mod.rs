// ============================================================================
// Exponential Module
// Fixed-point base-2 exponentials: decode -> approximate -> recompose
//
// - exp2m1 / exp2: the integer exponent grows the result (left shift),
//   saturating to u64::MAX past x = 34
// - rexp2: the integer exponent shrinks the result (right shift),
//   underflowing to zero past an exponent of 63
//
// All entry points are pure const fns: no allocation, no shared state.
// ============================================================================

mod exp2m1;
mod rexp2;

pub use exp2m1::{exp2_fxp, exp2m1_fxp, exp2m1_fxp_max, Exp2m1, EXP2M1_FXP_MAX};
pub use rexp2::{rexp2_fxp, Rexp2};

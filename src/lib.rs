// ============================================================================
// Oracle Fixed-Point Library
// Deterministic base-2 exponentials and quote aggregation without floats
// ============================================================================

//! # Oracle FXP
//!
//! Deterministic fixed-point approximations of `2^x - 1` and `2^-x` for
//! environments where floating point is unavailable or not reproducible
//! across hosts (for example consensus-critical on-chain computation).
//!
//! ## Features
//!
//! - **34.30 fixed point**: u64 values read as `raw / 2^30`
//! - **Build-time precision order** (1..=7, default 5) trading multiplies
//!   for accuracy, from about 4 bits up to about 30 bits
//! - **Exact at integers**: `2^n - 1` and `2^-n` come out exactly
//! - **Defined saturation**: `u64::MAX` past the `exp2m1` domain, zero once
//!   `rexp2` underflows
//! - **Pure const fns**: no allocation, no shared state, thread safe
//! - **Price model**: p25 / p50 / p75 of publisher quotes
//!
//! ## Example
//!
//! ```rust
//! use oracle_fxp::prelude::*;
//!
//! let one = 1u64 << 30;
//!
//! assert_eq!(exp2m1_fxp(one), one);          // 2^1 - 1 = 1
//! assert_eq!(exp2_fxp(3 * one), 8 * one);    // 2^3 = 8
//! assert_eq!(rexp2_fxp(one), one / 2);       // 2^-1 = 0.5
//! assert_eq!(exp2m1_fxp(exp2m1_fxp_max() + 1), u64::MAX);
//!
//! // The same kernels at an explicit order
//! assert_eq!(Exp2m1::<7>::eval(2 * one), 3 * one);
//! assert_eq!(Rexp2::<2>::eval(64 * one), 0);
//!
//! // Quote aggregation
//! let quartiles = price_model_core(&mut [101, 99, 100, 250]).unwrap();
//! assert_eq!(quartiles.p50, 100);
//! ```

pub mod approx;
pub mod exp;
pub mod model;
pub mod numeric;

// Re-exports for convenience
pub use exp::{exp2_fxp, exp2m1_fxp, exp2m1_fxp_max, rexp2_fxp};

pub mod prelude {
    pub use crate::approx::{PrecisionOrder, FXP_ORDER};
    pub use crate::exp::{exp2_fxp, exp2m1_fxp, exp2m1_fxp_max, rexp2_fxp, Exp2m1, Rexp2};
    pub use crate::model::{price_model_core, quick_select, PriceQuartiles};
    pub use crate::numeric::{Fxp, NumericError, NumericResult};
}

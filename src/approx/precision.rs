// ============================================================================
// Precision Order
// Build-time cost / accuracy tier for the polynomial approximations
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of Horner terms used by the polynomial approximations.
///
/// Each step up costs one more 64x64->64 multiply and one more 64-bit
/// add (or subtract) and buys roughly 4.5 bits of accuracy. Every order
/// has its own coefficient table; no order is derived from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PrecisionOrder {
    /// Piecewise linear, a few percent error
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    /// Comparable to IEEE single precision
    Five = 5,
    Six = 6,
    /// Within about one ulp of the 30-bit output
    Seven = 7,
}

/// Documented accuracy of one precision order, as implemented.
///
/// Relative errors are worst case over the fractional unit interval:
/// `exp2m1` is measured against `2^x` (the result plus one) and `rexp2`
/// against `2^-x`. Past the unit interval `exp2m1` keeps roughly the same
/// relative error while `rexp2` degrades to about one output ulp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy {
    /// Bits of accuracy delivered by the fitted polynomial
    pub bits: f64,
    /// Max relative error of `exp2m1_fxp(x) + 2^30` against `2^x`
    pub exp2m1_max_rel_err: f64,
    /// Max relative error of `rexp2_fxp(x)` against `2^-x`
    pub rexp2_max_rel_err: f64,
}

impl PrecisionOrder {
    /// All supported orders, cheapest first.
    pub const ALL: [Self; 7] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
    ];

    /// Order used when no `order-N` feature is enabled.
    pub const DEFAULT: Self = Self::Five;

    /// Look up an order by its term count.
    pub const fn from_u8(order: u8) -> Option<Self> {
        if order >= 1 && order <= 7 {
            Some(Self::ALL[order as usize - 1])
        } else {
            None
        }
    }

    /// Number of Horner terms (multiplies) for this order.
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Documented worst-case accuracy of both kernels at this order.
    pub const fn accuracy(self) -> Accuracy {
        let (bits, exp2m1_max_rel_err, rexp2_max_rel_err) = match self {
            Self::One => (4.0, 6.1e-2, 6.1e-2),
            Self::Two => (8.3, 3.2e-3, 3.2e-3),
            Self::Three => (13.0, 1.2e-4, 1.2e-4),
            Self::Four => (17.6, 5.0e-6, 5.0e-6),
            Self::Five => (22.8, 1.4e-7, 1.4e-7),
            Self::Six => (27.9, 4.3e-9, 4.0e-9),
            Self::Seven => (33.4, 5.4e-10, 1.9e-9),
        };
        Accuracy {
            bits,
            exp2m1_max_rel_err,
            rexp2_max_rel_err,
        }
    }
}

impl Default for PrecisionOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for PrecisionOrder {
    type Error = NumericError;

    fn try_from(order: u8) -> NumericResult<Self> {
        Self::from_u8(order).ok_or_else(|| {
            tracing::debug!(order, "rejected precision order");
            NumericError::UnsupportedOrder(order)
        })
    }
}

impl fmt::Display for PrecisionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order {}", self.get())
    }
}

// ============================================================================
// Build-time Selection
// ============================================================================

/// Precision order compiled into [`crate::exp2m1_fxp`] and
/// [`crate::rexp2_fxp`].
///
/// Chosen with one of the cargo features `order-1` ..= `order-7`,
/// [`PrecisionOrder::DEFAULT`] otherwise. Enabling several of them fails
/// constant evaluation, so the build is rejected.
pub const FXP_ORDER: PrecisionOrder = select_build_order([
    cfg!(feature = "order-1"),
    cfg!(feature = "order-2"),
    cfg!(feature = "order-3"),
    cfg!(feature = "order-4"),
    cfg!(feature = "order-5"),
    cfg!(feature = "order-6"),
    cfg!(feature = "order-7"),
]);

const fn select_build_order(enabled: [bool; 7]) -> PrecisionOrder {
    let mut selected = PrecisionOrder::DEFAULT;
    let mut count = 0;
    let mut idx = 0;
    while idx < enabled.len() {
        if enabled[idx] {
            selected = PrecisionOrder::ALL[idx];
            count += 1;
        }
        idx += 1;
    }
    assert!(
        count <= 1,
        "enable at most one of the `order-1` ..= `order-7` features"
    );
    selected
}

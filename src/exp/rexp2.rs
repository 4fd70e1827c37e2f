// ============================================================================
// rexp2
// Fixed-point 2^-x for any non-negative x, underflowing to zero
// ============================================================================

use crate::approx::{horner_difference, rexp2_table, HornerTable, PrecisionOrder, FXP_ORDER};
use crate::numeric::Fxp;

/// `2^-x` at a fixed precision order.
///
/// ```
/// use oracle_fxp::exp::Rexp2;
///
/// assert_eq!(Rexp2::<3>::eval(2 << 30), 1 << 28); // 0.25
/// assert_eq!(<Rexp2>::eval(64 << 30), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rexp2<const ORDER: u8 = 5>;

impl<const ORDER: u8> Rexp2<ORDER> {
    /// The compiled precision order.
    pub const PRECISION: PrecisionOrder = match PrecisionOrder::from_u8(ORDER) {
        Some(order) => order,
        None => panic!("rexp2 precision order must be in 1..=7"),
    };

    const TABLE: &'static HornerTable = rexp2_table(Self::PRECISION);

    /// Approximate `2^(-x/2^30)`, scaled by 2^30 and in `[0, 2^30]`.
    ///
    /// Exact for integer inputs. Once the integer exponent passes 63 the
    /// result is 0.
    #[inline]
    pub const fn eval(x: u64) -> u64 {
        // y ~ round(2^30 exp2(-d/2^30)) >> i
        let (i, d) = Fxp::from_raw(x).split();
        if i > 63 {
            return 0;
        }
        horner_difference(Self::TABLE, d) >> i
    }
}

/// Fixed-point `2^-x` at the build's precision order.
///
/// `x` is 34.30 fixed point with no upper bound; the result is in
/// `[0, 2^30]`.
#[inline]
pub const fn rexp2_fxp(x: u64) -> u64 {
    Rexp2::<{ FXP_ORDER.get() }>::eval(x)
}

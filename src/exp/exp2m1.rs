// ============================================================================
// exp2m1 / exp2
// Fixed-point 2^x - 1 for x in [0, 34), saturating past the domain
// ============================================================================

use crate::approx::{exp2m1_table, horner_sum, HornerTable, PrecisionOrder, FXP_ORDER};
use crate::numeric::{Fxp, FRAC_BITS};

/// Largest input accepted by `exp2m1`: 34 * 2^30 - 1 (i = 33, d = 2^30 - 1).
pub const EXP2M1_FXP_MAX: u64 = 0x8_7fff_ffff;

/// `2^x - 1` at a fixed precision order.
///
/// The order is a const parameter so the coefficient table is resolved
/// at compile time; an order outside 1..=7 fails to build.
///
/// ```
/// use oracle_fxp::exp::Exp2m1;
///
/// // 2^3 - 1 = 7
/// assert_eq!(Exp2m1::<7>::eval(3 << 30), 7 << 30);
/// assert_eq!(<Exp2m1>::eval(3 << 30), 7 << 30);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp2m1<const ORDER: u8 = 5>;

impl<const ORDER: u8> Exp2m1<ORDER> {
    /// The compiled precision order.
    pub const PRECISION: PrecisionOrder = match PrecisionOrder::from_u8(ORDER) {
        Some(order) => order,
        None => panic!("exp2m1 precision order must be in 1..=7"),
    };

    const TABLE: &'static HornerTable = exp2m1_table(Self::PRECISION);

    /// Approximate `2^(x/2^30) - 1` in 34.30 fixed point.
    ///
    /// Returns `u64::MAX` when `x > EXP2M1_FXP_MAX`. Integer inputs give
    /// the exact result.
    #[inline]
    pub const fn eval(x: u64) -> u64 {
        if x > EXP2M1_FXP_MAX {
            return u64::MAX;
        }

        // x = 2^30 i + d, so
        //   2^(30+i) 2^(d/2^30) - 2^30
        //     = (2^64 exp2m1(d/2^30)) / 2^(34-i) + 2^(30+i) - 2^30
        let (i, d) = Fxp::from_raw(x).split();
        let y = horner_sum(Self::TABLE, d);

        // s in [1,34]. y <= 2^64 - 2^34 and the rounding bias is at most
        // 2^33, so the add cannot wrap. Ties round away from zero.
        let s = 34 - i as u32;
        ((y + (1 << (s - 1))) >> s) + (1 << (64 - s)) - (1 << FRAC_BITS)
    }

    /// Approximate `2^(x/2^30)`: `eval(x) + 2^30`, or `u64::MAX` when
    /// `x > EXP2M1_FXP_MAX`.
    #[inline]
    pub const fn eval_exp2(x: u64) -> u64 {
        if x > EXP2M1_FXP_MAX {
            return u64::MAX;
        }
        Self::eval(x) + Fxp::SCALE
    }
}

/// Fixed-point `2^x - 1` at the build's precision order.
///
/// `x` is 34.30 fixed point; the result is 34.30 fixed point, or
/// `u64::MAX` when `x > exp2m1_fxp_max()`.
#[inline]
pub const fn exp2m1_fxp(x: u64) -> u64 {
    Exp2m1::<{ FXP_ORDER.get() }>::eval(x)
}

/// Largest valid `exp2m1_fxp` input, 34 * 2^30 - 1.
#[inline]
pub const fn exp2m1_fxp_max() -> u64 {
    EXP2M1_FXP_MAX
}

/// Fixed-point `2^x` at the build's precision order, saturating to
/// `u64::MAX` like [`exp2m1_fxp`].
#[inline]
pub const fn exp2_fxp(x: u64) -> u64 {
    Exp2m1::<{ FXP_ORDER.get() }>::eval_exp2(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ONE: u64 = 1 << 30;

    const _: () = assert!(exp2m1_fxp(0) == 0);
    const _: () = assert!(exp2m1_fxp(ONE) == ONE);
    const _: () = assert!(exp2m1_fxp(EXP2M1_FXP_MAX + 1) == u64::MAX);

    const KERNELS: [(PrecisionOrder, fn(u64) -> u64); 7] = [
        (PrecisionOrder::One, Exp2m1::<1>::eval),
        (PrecisionOrder::Two, Exp2m1::<2>::eval),
        (PrecisionOrder::Three, Exp2m1::<3>::eval),
        (PrecisionOrder::Four, Exp2m1::<4>::eval),
        (PrecisionOrder::Five, Exp2m1::<5>::eval),
        (PrecisionOrder::Six, Exp2m1::<6>::eval),
        (PrecisionOrder::Seven, Exp2m1::<7>::eval),
    ];

    fn kernel(k: u8) -> (PrecisionOrder, fn(u64) -> u64) {
        KERNELS[k as usize - 1]
    }

    #[test]
    fn test_max_input() {
        assert_eq!(exp2m1_fxp_max(), 34 * ONE - 1);
        assert_eq!(Fxp::from_raw(exp2m1_fxp_max()).split(), (33, ONE - 1));
    }

    #[test]
    fn test_concrete_vectors() {
        assert_eq!(exp2m1_fxp(0), 0);
        assert_eq!(exp2m1_fxp(ONE), ONE);
        assert_eq!(exp2m1_fxp(2 * ONE), 3 * ONE);
        assert_eq!(exp2_fxp(0), ONE);
        assert_eq!(exp2_fxp(ONE), 2 * ONE);
    }

    #[test]
    fn test_integer_inputs_are_exact() {
        for (order, f) in KERNELS {
            for n in 0..34u64 {
                assert_eq!(f(n << 30), (1 << (30 + n)) - ONE, "{order}, n = {n}");
            }
        }
    }

    #[test]
    fn test_saturation() {
        for (order, f) in KERNELS {
            assert_eq!(f(EXP2M1_FXP_MAX + 1), u64::MAX, "{order}");
            assert_eq!(f(u64::MAX), u64::MAX, "{order}");

            let top = f(EXP2M1_FXP_MAX);
            assert_ne!(top, u64::MAX, "{order}");
            assert!(top > f(EXP2M1_FXP_MAX - 1), "{order}");
            assert!(top > u64::MAX - (1 << 34), "{order}");
        }
        assert_eq!(exp2_fxp(EXP2M1_FXP_MAX + 1), u64::MAX);
        assert_eq!(exp2_fxp(EXP2M1_FXP_MAX), exp2m1_fxp(EXP2M1_FXP_MAX) + ONE);
    }

    #[test]
    fn test_reference_values() {
        // x = 0.5, 2.5, max, and one ulp
        let inputs = [ONE / 2, 2 * ONE + ONE / 2, EXP2M1_FXP_MAX, 1];
        let expected: [[u64; 4]; 7] = [
            [536870912, 5368709120, 18446744064045875200, 1],
            [444574815, 4999524732, 18446744060287778820, 1],
            [444574815, 4999524732, 18446744060287778820, 1],
            [444758521, 5000259557, 18446744060824649731, 1],
            [444758521, 5000259557, 18446744060287778820, 1],
            [444758426, 5000259176, 18446744060287778820, 1],
            [444758426, 5000259176, 18446744060287778820, 1],
        ];
        for ((order, f), row) in KERNELS.iter().zip(expected) {
            for (x, want) in inputs.iter().zip(row) {
                assert_eq!(f(*x), want, "{order}, x = {x:#x}");
            }
        }
    }

    #[test]
    fn test_order_seven_rounds_sqrt2_correctly() {
        // (sqrt(2) - 1) * 2^30 = 444758425.988...
        assert_eq!(Exp2m1::<7>::eval(ONE / 2), 444_758_426);
    }

    #[test]
    fn test_build_order_matches_kernel() {
        let (_, f) = kernel(FXP_ORDER.get());
        for x in [0, 1, ONE / 3, 5 * ONE + 12345, EXP2M1_FXP_MAX] {
            assert_eq!(exp2m1_fxp(x), f(x));
            assert_eq!(exp2_fxp(x), f(x) + ONE);
        }
    }

    proptest! {
        #[test]
        fn prop_monotone(a in 0..=EXP2M1_FXP_MAX, delta in 0..(1u64 << 32), k in 1..=7u8) {
            let (_, f) = kernel(k);
            let b = a.saturating_add(delta).min(EXP2M1_FXP_MAX);
            prop_assert!(f(a) <= f(b));
        }

        #[test]
        fn prop_within_documented_error(x in 0..=EXP2M1_FXP_MAX, k in 1..=7u8) {
            let (order, f) = kernel(k);
            let bound = order.accuracy().exp2m1_max_rel_err * 1.1;
            let exact = (x as f64 / ONE as f64).exp2() * ONE as f64;
            let approx = (f(x) + ONE) as f64;
            prop_assert!(
                (approx - exact).abs() <= bound * exact + 1.0,
                "{} x={:#x} approx={} exact={}", order, x, approx, exact
            );
        }
    }
}

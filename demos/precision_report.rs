// ============================================================================
// Precision Report
// ============================================================================
//
// Prints documented vs. sampled accuracy for every precision order, then
// aggregates a handful of quotes. Run with `--features logging` to see the
// tracing output.

use oracle_fxp::exp::{Exp2m1, Rexp2};
use oracle_fxp::prelude::*;

const ONE: u64 = 1 << 30;

fn sampled_max_rel_err(f: fn(u64) -> u64, exact: fn(f64) -> f64) -> f64 {
    (0..ONE)
        .step_by(65_537)
        .map(|x| {
            let want = exact(x as f64 / ONE as f64);
            let got = f(x) as f64 / ONE as f64;
            (got - want).abs() / want
        })
        .fold(0.0, f64::max)
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed-Point Exponential Precision Report ===\n");
    println!("Compiled order: {}\n", FXP_ORDER);

    let kernels: [(PrecisionOrder, fn(u64) -> u64, fn(u64) -> u64); 7] = [
        (PrecisionOrder::One, Exp2m1::<1>::eval_exp2, Rexp2::<1>::eval),
        (PrecisionOrder::Two, Exp2m1::<2>::eval_exp2, Rexp2::<2>::eval),
        (PrecisionOrder::Three, Exp2m1::<3>::eval_exp2, Rexp2::<3>::eval),
        (PrecisionOrder::Four, Exp2m1::<4>::eval_exp2, Rexp2::<4>::eval),
        (PrecisionOrder::Five, Exp2m1::<5>::eval_exp2, Rexp2::<5>::eval),
        (PrecisionOrder::Six, Exp2m1::<6>::eval_exp2, Rexp2::<6>::eval),
        (PrecisionOrder::Seven, Exp2m1::<7>::eval_exp2, Rexp2::<7>::eval),
    ];

    println!(
        "{:<8} {:>6} {:>14} {:>14} {:>14} {:>14}",
        "order", "bits", "exp2 doc", "exp2 sampled", "rexp2 doc", "rexp2 sampled"
    );
    for (order, exp2, rexp2) in kernels {
        let accuracy = order.accuracy();
        println!(
            "{:<8} {:>6.1} {:>14.2e} {:>14.2e} {:>14.2e} {:>14.2e}",
            order.get(),
            accuracy.bits,
            accuracy.exp2m1_max_rel_err,
            sampled_max_rel_err(exp2, f64::exp2),
            accuracy.rexp2_max_rel_err,
            sampled_max_rel_err(rexp2, |x| (-x).exp2()),
        );
    }

    println!("\n2^0.5 at the compiled order: {}", Fxp::from_raw(exp2_fxp(ONE / 2)));
    println!("2^-0.5 at the compiled order: {}", Fxp::from_raw(rexp2_fxp(ONE / 2)));
    println!("exp2m1_fxp(max + 1) = {:#x}", exp2m1_fxp(exp2m1_fxp_max() + 1));

    println!("\nAggregating quotes...");
    let mut quotes = [50_010, 49_990, 50_000, 50_005, 51_500, 49_995];
    match price_model_core(&mut quotes) {
        Ok(q) => println!("p25={} p50={} p75={}", q.p25, q.p50, q.p75),
        Err(e) => println!("aggregation failed: {}", e),
    }

    println!("\n=== Report Complete ===");
}

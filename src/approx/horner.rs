// ============================================================================
// Horner Evaluation
// Nested multiply-add over a coefficient table, in both directions
// ============================================================================

use super::tables::HornerTable;

/// Ascending evaluation: `y = coeff + ((y * d) >> shift)` per term.
///
/// `d` must be below 2^30. With the `exp2m1` tables the result is the
/// fractional estimate scaled by 2^64.
///
/// # Panics
/// In debug builds, if an intermediate `y * d` or the add overflows u64.
/// The tables from [`exp2m1_table`](super::exp2m1_table) never do for
/// `d < 2^30`; hand-built tables must keep every intermediate below
/// `2^64 / d`.
#[inline]
pub const fn horner_sum(table: &HornerTable, d: u64) -> u64 {
    let mut y = table.lead;
    let mut idx = 0;
    while idx < table.terms.len() {
        let term = table.terms[idx];
        y = term.coeff + ((y * d) >> term.shift);
        idx += 1;
    }
    y
}

/// Descending evaluation: `y = coeff - ((y * d) >> shift)` per term.
///
/// `d` must be at most 2^30. With the `rexp2` tables the result is the
/// estimate scaled by 2^30, in `[2^29, 2^30]`.
///
/// # Panics
/// In debug builds, if an intermediate `y * d` overflows u64 or a
/// subtraction goes below zero. The tables from
/// [`rexp2_table`](super::rexp2_table) do neither for `d <= 2^30`.
#[inline]
pub const fn horner_difference(table: &HornerTable, d: u64) -> u64 {
    let mut y = table.lead;
    let mut idx = 0;
    while idx < table.terms.len() {
        let term = table.terms[idx];
        y = term.coeff - ((y * d) >> term.shift);
        idx += 1;
    }
    y
}

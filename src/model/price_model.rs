// ============================================================================
// Price Model
// Quote aggregation into p25 / p50 / p75 with in-place selection
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate of a set of publisher quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceQuartiles {
    pub p25: i64,
    pub p50: i64,
    pub p75: i64,
}

/// Floor of `(a + b) / 2` without intermediate overflow.
#[inline]
pub const fn avg_2_i64(a: i64, b: i64) -> i64 {
    // Arithmetic shift rounds toward negative infinity.
    ((a as i128 + b as i128) >> 1) as i64
}

/// Select the `k`-th smallest element (0-based), reordering `values`.
///
/// Quick select with a median-of-three pivot. The partition swaps elements
/// equal to the pivot as well, so runs of duplicates split evenly between
/// the two halves instead of degrading to quadratic time.
///
/// # Errors
/// - `EmptyInput` if `values` is empty
/// - `InvalidInput` if `k >= values.len()`
pub fn quick_select(values: &mut [i64], k: usize) -> NumericResult<i64> {
    if values.is_empty() {
        return Err(NumericError::EmptyInput);
    }
    if k >= values.len() {
        tracing::trace!(k, len = values.len(), "selection index out of range");
        return Err(NumericError::InvalidInput);
    }

    let mut a = values;
    let mut k = k;
    loop {
        let n = a.len();
        if n == 1 {
            return Ok(a[0]);
        }

        let pivot = median_of_three(a[0], a[n / 2], a[n - 1]);

        // On exit a[..hi] <= pivot and a[i..] >= pivot, with i in {hi, hi + 1}.
        // When i == hi + 1 the element a[hi] equals the pivot.
        let mut i = 0;
        let mut hi = n;
        while i < hi {
            if a[i] < pivot {
                i += 1;
                continue;
            }
            if a[hi - 1] > pivot {
                hi -= 1;
                continue;
            }
            a.swap(i, hi - 1);
            i += 1;
            hi -= 1;
        }

        let current = std::mem::take(&mut a);
        if k < hi {
            a = &mut current[..hi];
        } else if i == hi + 1 && k == hi {
            return Ok(pivot);
        } else {
            a = &mut current[hi..];
            k -= hi;
        }
    }
}

#[inline]
fn median_of_three(first: i64, middle: i64, last: i64) -> i64 {
    if first < middle {
        if middle < last {
            middle
        } else if first < last {
            last
        } else {
            first
        }
    } else if middle > last {
        middle
    } else if first > last {
        last
    } else {
        first
    }
}

/// Compute the p25, p50 and p75 of a set of quotes.
///
/// - p50: the middle quote for an odd count, the floor average of the two
///   middle quotes for an even count
/// - p25: the quote at index `n / 4` in sorted order
/// - p75: the mirror image, index `n - 1 - n / 4`
///
/// `quotes` is reordered in place.
///
/// # Errors
/// Returns `EmptyInput` if there are no quotes.
pub fn price_model_core(quotes: &mut [i64]) -> NumericResult<PriceQuartiles> {
    let cnt = quotes.len();
    if cnt == 0 {
        return Err(NumericError::EmptyInput);
    }

    let p50 = if cnt % 2 == 1 {
        quick_select(quotes, cnt / 2)?
    } else {
        // cnt >= 2, so both middle indices are valid
        let right = cnt / 2;
        let vl = quick_select(quotes, right - 1)?;
        let vr = quick_select(quotes, right)?;
        avg_2_i64(vl, vr)
    };

    let p25_idx = cnt / 4;
    let p25 = quick_select(quotes, p25_idx)?;
    let p75 = quick_select(quotes, cnt - 1 - p25_idx)?;

    tracing::debug!(cnt, p25, p50, p75, "aggregated quotes");
    Ok(PriceQuartiles { p25, p50, p75 })
}

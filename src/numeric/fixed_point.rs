// ============================================================================
// Fixed-Point 34.30
// Unsigned fixed-point value with 34 integer bits and 30 fractional bits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::exp::{exp2_fxp, exp2m1_fxp, rexp2_fxp};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional bits in the 34.30 encoding.
pub const FRAC_BITS: u32 = 30;

/// Number of integer bits in the 34.30 encoding.
pub const INT_BITS: u32 = 64 - FRAC_BITS;

/// Unsigned fixed-point number in 34.30 format.
///
/// Stores the real number `raw / 2^30` as a u64. Every value decomposes
/// exactly as `raw = 2^30 * i + d` with `i = raw >> 30` (the integer
/// exponent when used as an exponent) and `d` in `[0, 2^30)`.
///
/// # Value Range
/// - Minimum: 0
/// - Maximum: 17179869183.999999999 (2^34 - 2^-30)
/// - Precision: 2^-30 (about 9.3e-10)
///
/// # Example
/// ```
/// use oracle_fxp::numeric::Fxp;
///
/// let x = Fxp::from_parts(3, 1 << 29).unwrap(); // 3.5
/// assert_eq!(x.split(), (3, 1 << 29));
/// assert_eq!(x.to_string(), "3.5");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Fxp(u64);

impl Fxp {
    /// The scale factor (2^30)
    pub const SCALE: u64 = 1 << FRAC_BITS;

    /// Mask selecting the fractional bits
    pub const FRAC_MASK: u64 = Self::SCALE - 1;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(Self::SCALE);

    /// Maximum representable value, also the saturation sentinel of `exp2m1`
    pub const MAX: Self = Self(u64::MAX);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value needs more than 34 bits.
    #[inline]
    pub fn from_integer(value: u64) -> NumericResult<Self> {
        if value >> INT_BITS != 0 {
            return Err(NumericError::Overflow);
        }
        Ok(Self(value << FRAC_BITS))
    }

    /// Create from integer and fractional parts (the inverse of [`Fxp::split`]).
    ///
    /// # Errors
    /// - `InvalidInput` if `fraction >= 2^30`
    /// - `Overflow` if `integer` needs more than 34 bits
    #[inline]
    pub fn from_parts(integer: u64, fraction: u64) -> NumericResult<Self> {
        if fraction > Self::FRAC_MASK {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self(Self::from_integer(integer)?.0 | fraction))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 2^30).
    #[inline]
    pub const fn raw_value(self) -> u64 {
        self.0
    }

    /// Get the integer part `i = raw >> 30`.
    #[inline]
    pub const fn integer_part(self) -> u64 {
        self.0 >> FRAC_BITS
    }

    /// Get the fractional remainder `d = raw & (2^30 - 1)`.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        self.0 & Self::FRAC_MASK
    }

    /// Split into `(i, d)` such that `raw == (i << 30) | d`.
    #[inline]
    pub const fn split(self) -> (u64, u64) {
        (self.integer_part(), self.fractional_part())
    }

    /// Recombine `(i, d)` into `(i << 30) | d`, the inverse of [`Fxp::split`].
    ///
    /// Total: `d` keeps only its low 30 bits and `i` only its low 34, so
    /// pairs from `split` round-trip exactly. Use [`Fxp::from_parts`] to
    /// reject out-of-range parts instead.
    #[inline]
    pub const fn join(i: u64, d: u64) -> Self {
        Self((i << FRAC_BITS) | (d & Self::FRAC_MASK))
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    // ========================================================================
    // Exponentials
    // ========================================================================

    /// `2^self - 1`, saturating to [`Fxp::MAX`] past the domain.
    #[inline]
    pub const fn exp2m1(self) -> Self {
        Self(exp2m1_fxp(self.0))
    }

    /// `2^self`, saturating to [`Fxp::MAX`] past the domain.
    #[inline]
    pub const fn exp2(self) -> Self {
        Self(exp2_fxp(self.0))
    }

    /// `2^-self`, always in `[0, 1]`.
    #[inline]
    pub const fn rexp2(self) -> Self {
        Self(rexp2_fxp(self.0))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fxp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fxp({}, raw={:#x})", self, self.0)
    }
}

impl fmt::Display for Fxp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fxp {
    /// Convert from rust_decimal::Decimal, requiring an exact 2^-30 multiple.
    ///
    /// # Errors
    /// - `InvalidInput` for negative values
    /// - `PrecisionLoss` if the value is not a multiple of 2^-30
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scaled = Self::scale_decimal(d)?;
        if !scaled.fract().is_zero() {
            tracing::trace!(value = %d, "decimal is not a multiple of 2^-30");
            return Err(NumericError::PrecisionLoss);
        }
        scaled.to_u64().map(Self).ok_or(NumericError::Overflow)
    }

    /// Convert from rust_decimal::Decimal, rounding to the nearest 2^-30
    /// (ties to even).
    ///
    /// # Errors
    /// - `InvalidInput` for negative values
    /// - `Overflow` if the value is too large
    pub fn from_decimal_rounded(d: Decimal) -> NumericResult<Self> {
        Self::scale_decimal(d)?
            .round()
            .to_u64()
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Decimal carries 28 significant digits, so very large values lose
    /// their lowest fractional digits. Intended for display and debugging.
    pub fn to_decimal(self) -> Decimal {
        (Decimal::from(self.0) / Decimal::from(Self::SCALE)).normalize()
    }

    fn scale_decimal(d: Decimal) -> NumericResult<Decimal> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(NumericError::InvalidInput);
        }
        d.checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Fxp {
    type Err = NumericError;

    /// Parse from a decimal string, rounding to the nearest 2^-30.
    ///
    /// # Examples
    /// - "3" -> raw 3 << 30
    /// - "0.5" -> raw 1 << 29
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let d: Decimal = s.parse().map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal_rounded(d)
    }
}

impl From<Fxp> for u64 {
    #[inline]
    fn from(x: Fxp) -> u64 {
        x.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(Fxp::SCALE, 1_073_741_824);
        assert_eq!(Fxp::FRAC_MASK, 0x3fff_ffff);
        assert_eq!(Fxp::ONE.raw_value(), 1 << 30);
        assert_eq!(INT_BITS, 34);
    }

    #[test]
    fn test_from_integer() {
        let x = Fxp::from_integer(33).unwrap();
        assert_eq!(x.raw_value(), 33 << 30);
        assert_eq!(x.split(), (33, 0));

        let top = Fxp::from_integer((1 << 34) - 1).unwrap();
        assert_eq!(top.integer_part(), (1 << 34) - 1);
        assert_eq!(Fxp::from_integer(1 << 34), Err(NumericError::Overflow));
    }

    #[test]
    fn test_from_parts() {
        let x = Fxp::from_parts(2, 1 << 28).unwrap(); // 2.25
        assert_eq!(x.integer_part(), 2);
        assert_eq!(x.fractional_part(), 1 << 28);
        assert_eq!(x.to_string(), "2.25");

        assert_eq!(Fxp::from_parts(1, 1 << 30), Err(NumericError::InvalidInput));
        assert_eq!(Fxp::from_parts(1 << 34, 0), Err(NumericError::Overflow));
    }

    #[test]
    fn test_join() {
        const X: Fxp = Fxp::join(33, (1 << 30) - 1);
        assert_eq!(X.raw_value(), 0x8_7fff_ffff);
        assert_eq!(Fxp::join(0, 0), Fxp::ZERO);
        assert_eq!(Fxp::join(1, 0), Fxp::ONE);
        // Stray high bits of d never leak into the integer part
        assert_eq!(Fxp::join(2, (1 << 30) | 5), Fxp::join(2, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Fxp::ZERO.to_string(), "0");
        assert_eq!(Fxp::ONE.to_string(), "1");
        assert_eq!(Fxp::from_raw(1 << 29).to_string(), "0.5");
        assert_eq!(Fxp::from_raw(1 << 20).to_string(), "0.0009765625");
        assert_eq!(format!("{:?}", Fxp::ONE), "Fxp(1, raw=0x40000000)");
    }

    #[test]
    fn test_from_decimal() {
        let x = Fxp::from_decimal(Decimal::new(175, 2)).unwrap(); // 1.75
        assert_eq!(x.raw_value(), 7 << 28);

        // 0.1 has no exact 2^-30 representation
        assert_eq!(
            Fxp::from_decimal(Decimal::new(1, 1)),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            Fxp::from_decimal(Decimal::new(-1, 0)),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_from_decimal_rounded() {
        // 0.1 * 2^30 = 107374182.4
        let x = Fxp::from_decimal_rounded(Decimal::new(1, 1)).unwrap();
        assert_eq!(x.raw_value(), 107_374_182);
    }

    #[test]
    fn test_from_str() {
        let x: Fxp = "3".parse().unwrap();
        assert_eq!(x, Fxp::from_integer(3).unwrap());

        let y: Fxp = " 0.5 ".parse().unwrap();
        assert_eq!(y.raw_value(), 1 << 29);

        assert_eq!("".parse::<Fxp>(), Err(NumericError::InvalidInput));
        assert_eq!("abc".parse::<Fxp>(), Err(NumericError::InvalidInput));
        assert_eq!("-2".parse::<Fxp>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_exponential_methods() {
        let one = Fxp::ONE;
        assert_eq!(one.exp2m1(), Fxp::ONE);
        assert_eq!(one.exp2(), Fxp::from_integer(2).unwrap());
        assert_eq!(one.rexp2(), Fxp::from_raw(1 << 29));
        assert_eq!(Fxp::from_integer(34).unwrap().exp2m1(), Fxp::MAX);
        assert_eq!(Fxp::from_integer(34).unwrap().exp2(), Fxp::MAX);
    }

    #[test]
    fn test_ordering() {
        let a = Fxp::from_raw(10);
        let b = Fxp::from_raw(11);
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(Fxp::default(), Fxp::ZERO);
        assert!(Fxp::default().is_zero());
    }

    proptest! {
        #[test]
        fn prop_split_is_lossless(raw in any::<u64>()) {
            let x = Fxp::from_raw(raw);
            let (i, d) = x.split();
            prop_assert!(d < Fxp::SCALE);
            prop_assert_eq!((i << FRAC_BITS) | d, raw);
            prop_assert_eq!(Fxp::join(i, d), x);
            prop_assert_eq!(Fxp::from_parts(i, d).unwrap(), x);
        }

        #[test]
        fn prop_join_agrees_with_from_parts(i in 0..(1u64 << INT_BITS), d in 0..Fxp::SCALE) {
            prop_assert_eq!(Fxp::join(i, d), Fxp::from_parts(i, d).unwrap());
            prop_assert_eq!(Fxp::join(i, d).split(), (i, d));
        }
    }
}

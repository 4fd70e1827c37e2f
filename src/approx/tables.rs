// ============================================================================
// Coefficient Tables
// Offline-fitted Horner coefficients, one table per order and direction
// ============================================================================
//
// Each polynomial minimizes RMS error over the fractional interval [0,1)
// while matching exactly at 0 and 1. Coefficients are quantized so every
// Horner intermediate stays below 2^35, which keeps `y * d` (d < 2^30)
// inside 64 bits. Do not refit by hand: these are transcribed constants.

use super::precision::PrecisionOrder;

/// One nested multiply-add step: `y = coeff +/- ((y * d) >> shift)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HornerTerm {
    pub coeff: u64,
    pub shift: u32,
}

/// Leading coefficient plus the ordered Horner steps for one order.
///
/// The number of steps equals the precision order. The published tables
/// come from [`exp2m1_table`] and [`rexp2_table`]; a hand-built table must
/// keep its Horner intermediates small enough that `y * d` fits in 64 bits,
/// or evaluation panics in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HornerTable {
    pub lead: u64,
    pub terms: &'static [HornerTerm],
}

impl HornerTable {
    /// Number of multiplies performed by one evaluation.
    #[inline]
    pub const fn order(&self) -> usize {
        self.terms.len()
    }
}

const fn t(coeff: u64, shift: u32) -> HornerTerm {
    HornerTerm { coeff, shift }
}

// ============================================================================
// exp2m1: y ~ 2^64 * (2^(d/2^30) - 1), ascending sum ending in a bare y*d
// ============================================================================

const EXP2M1_1: HornerTable = HornerTable {
    lead: 0x4_0000_0000,
    terms: &[t(0, 0)],
};

const EXP2M1_2: HornerTable = HornerTable {
    lead: 0x2_c029_d07d,
    terms: &[t(0x2_9feb_17c1, 31), t(0, 0)],
};

const EXP2M1_3: HornerTable = HornerTable {
    lead: 0x2_8831_9c3e,
    terms: &[t(0x1_cd17_35e6, 32), t(0x2_c86e_3185, 31), t(0, 0)],
};

const EXP2M1_4: HornerTable = HornerTable {
    lead: 0x3_8100_ce15,
    terms: &[
        t(0x1_a7f1_68b9, 33),
        t(0x1_eeba_70d4, 32),
        t(0x2_c5a0_9747, 31),
        t(0, 0),
    ],
};

const EXP2M1_5: HornerTable = HornerTable {
    lead: 0x3_e1a2_fa1b,
    terms: &[
        t(0x2_4a7d_dfee, 33),
        t(0x1_c994_ed30, 33),
        t(0x1_ebd1_3698, 32),
        t(0x2_c5c9_fe11, 31),
        t(0, 0),
    ],
};

const EXP2M1_6: HornerTable = HornerTable {
    lead: 0x3_959e_8bc0,
    terms: &[
        t(0x2_8987_867f, 33),
        t(0x2_7aac_1b83, 33),
        t(0x1_c67f_6aa0, 33),
        t(0x1_ebfd_e70a, 32),
        t(0x2_c5c8_510d, 31),
        t(0, 0),
    ],
};

const EXP2M1_7: HornerTable = HornerTable {
    lead: 0x2_d6e5_bd1d,
    terms: &[
        t(0x2_5799_2e8b, 33),
        t(0x2_c022_65a3, 33),
        t(0x2_7607_eb13, 33),
        t(0x1_c6b3_0b08, 33),
        t(0x1_ebfb_cc25, 32),
        t(0x2_c5c8_604f, 31),
        t(0, 0),
    ],
};

// ============================================================================
// rexp2: y ~ 2^30 * 2^(-d/2^30), descending subtraction chain ending at 2^30
// ============================================================================

const REXP2_1: HornerTable = HornerTable {
    lead: 0x2_0000_0000,
    terms: &[t(0x4000_0000, 34)],
};

const REXP2_2: HornerTable = HornerTable {
    lead: 0x2_c029_d07d,
    terms: &[t(0x2_b00a_741f, 32), t(0x4000_0000, 34)],
};

const REXP2_3: HornerTable = HornerTable {
    lead: 0x2_8831_9c3e,
    terms: &[
        t(0x3_b33c_6b15, 32),
        t(0x2_c44c_0101, 32),
        t(0x4000_0000, 34),
    ],
};

const REXP2_4: HornerTable = HornerTable {
    lead: 0x3_8100_ce16,
    terms: &[
        t(0x3_6871_cfc4, 33),
        t(0x3_d4df_a602, 32),
        t(0x2_c5b2_ce21, 32),
        t(0x4000_0000, 34),
    ],
};

const REXP2_5: HornerTable = HornerTable {
    lead: 0x3_e1a2_f97e,
    terms: &[
        t(0x2_5bc1_de09, 34),
        t(0x3_8a15_5436, 32),
        t(0x3_d7c8_e03d, 32),
        t(0x2_c5c7_8186, 32),
        t(0x4000_0000, 34),
    ],
};

const REXP2_6: HornerTable = HornerTable {
    lead: 0x3_959e_0dfb,
    terms: &[
        t(0x2_9cdf_1eff, 34),
        t(0x2_73d8_f899, 33),
        t(0x3_8d2a_d669, 32),
        t(0x3_d7f5_90ad, 32),
        t(0x2_c5c8_5808, 32),
        t(0x4000_0000, 34),
    ],
};

const REXP2_7: HornerTable = HornerTable {
    lead: 0x2_d6cd_448b,
    terms: &[
        t(0x2_69cc_5254, 34),
        t(0x2_b82b_c124, 33),
        t(0x2_762b_03ae, 33),
        t(0x3_8d5e_75bc, 32),
        t(0x3_d7f7_ab76, 32),
        t(0x2_c5c8_5fa8, 32),
        t(0x4000_0000, 34),
    ],
};

// ============================================================================
// Lookup
// ============================================================================

/// Coefficient table for `exp2m1` at the given order.
pub const fn exp2m1_table(order: PrecisionOrder) -> &'static HornerTable {
    match order {
        PrecisionOrder::One => &EXP2M1_1,
        PrecisionOrder::Two => &EXP2M1_2,
        PrecisionOrder::Three => &EXP2M1_3,
        PrecisionOrder::Four => &EXP2M1_4,
        PrecisionOrder::Five => &EXP2M1_5,
        PrecisionOrder::Six => &EXP2M1_6,
        PrecisionOrder::Seven => &EXP2M1_7,
    }
}

/// Coefficient table for `rexp2` at the given order.
pub const fn rexp2_table(order: PrecisionOrder) -> &'static HornerTable {
    match order {
        PrecisionOrder::One => &REXP2_1,
        PrecisionOrder::Two => &REXP2_2,
        PrecisionOrder::Three => &REXP2_3,
        PrecisionOrder::Four => &REXP2_4,
        PrecisionOrder::Five => &REXP2_5,
        PrecisionOrder::Six => &REXP2_6,
        PrecisionOrder::Seven => &REXP2_7,
    }
}

// ============================================================================
// Model Module
// Aggregation of publisher quotes into a robust price estimate
// ============================================================================

mod price_model;

pub use price_model::{avg_2_i64, price_model_core, quick_select, PriceQuartiles};

//! Regional price dispersion types

use rust_decimal::Decimal;
use serde::Serialize;

/// Per-item price dispersion summary across all observed regions.
///
/// `coefficient_of_variation_pct` is zero whenever the mean price is zero,
/// never negative, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalStatistics {
    pub item_name: String,
    pub mean_price: Decimal,
    pub std_dev: Decimal,
    pub coefficient_of_variation_pct: Decimal,
    pub region_count: usize,
}

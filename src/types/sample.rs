//! Market observation types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// One region's market observation for one item.
///
/// The store keeps at most one live sample per (item, region) pair; a newer
/// sample for the same pair replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSample {
    pub item_name: String,
    pub region: String,
    pub price: Decimal,
    pub volume: u64,
    pub observed_at: DateTime<Utc>,
}

impl PriceSample {
    pub fn new(item_name: &str, region: &str, price: Decimal, volume: u64) -> Self {
        Self {
            item_name: item_name.to_string(),
            region: region.to_string(),
            price,
            volume,
            observed_at: Utc::now(),
        }
    }
}

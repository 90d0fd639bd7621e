//! Arbitrage opportunity types

use rust_decimal::Decimal;
use serde::Serialize;
use std::time::Duration;

/// A detected buy-low/sell-high pairing between two regions.
///
/// Opportunities are created fresh on every scan and never mutated; the next
/// scan's result set supersedes them wholesale. `sell_price >= buy_price`
/// holds by construction since the detector always buys at the price floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageOpportunity {
    pub item_name: String,
    pub source_region: String,
    pub target_region: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub quantity: u64,
    pub gross_margin_pct: Decimal,
    pub broker_fees: Decimal,
    pub taxes: Decimal,
    pub net_profit: Decimal,
    pub profit_pct: Decimal,
    pub risk_score: Decimal,
    pub jump_distance: u32,
    pub estimated_travel_time: Duration,
}

impl ArbitrageOpportunity {
    /// Route label in "Source → Target" form, as shown to consumers.
    pub fn route(&self) -> String {
        format!("{} → {}", self.source_region, self.target_region)
    }
}

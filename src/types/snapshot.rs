//! Published scan output types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use super::{ArbitrageOpportunity, RegionalStatistics};

/// The immutable output of one complete scan cycle.
///
/// Built fully off to the side by the scheduler and published with a single
/// reference swap; readers always see either the previous complete snapshot
/// or this one, never a partially built set. `stale` is raised (by
/// republishing a copy) when the upstream feed failed to refresh before the
/// next scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSnapshot {
    pub scan_id: String,
    pub generated_at: DateTime<Utc>,
    pub stale: bool,
    /// Best-first: profit percent descending, net profit descending,
    /// item name ascending.
    pub opportunities: Vec<ArbitrageOpportunity>,
    pub statistics: HashMap<String, RegionalStatistics>,
    pub best_margin_pct: Decimal,
    pub best_route: Option<String>,
    /// Count over the full filtered set, before top-N truncation.
    pub total_opportunity_count: usize,
}

impl ScanSnapshot {
    /// Scan-invariant content equality: everything except the per-scan
    /// header metadata (id, timestamp, staleness).
    pub fn same_content(&self, other: &ScanSnapshot) -> bool {
        self.opportunities == other.opportunities
            && self.statistics == other.statistics
            && self.best_margin_pct == other.best_margin_pct
            && self.best_route == other.best_route
            && self.total_opportunity_count == other.total_opportunity_count
    }
}

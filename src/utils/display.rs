//! Display and printing utilities

use std::time::Instant;
use tracing::{info, warn};
use crate::scheduler::ScanMetricsSummary;
use crate::types::{ArbitrageOpportunity, ScanSnapshot};

pub fn print_scan_snapshot(snapshot: &ScanSnapshot) {
    info!("\n📊 Scan {} ({} items tracked)", snapshot.scan_id, snapshot.statistics.len());
    if snapshot.stale {
        warn!("   ⚠️  Snapshot is STALE - feed has not refreshed");
    }
    info!("   Opportunities: {} (showing top {})",
        snapshot.total_opportunity_count,
        snapshot.opportunities.len()
    );
    if let Some(route) = &snapshot.best_route {
        info!("   Best margin: {:.2}% on {}", snapshot.best_margin_pct, route);
    }

    for opportunity in &snapshot.opportunities {
        print_opportunity(opportunity);
    }
}

pub fn print_opportunity(opportunity: &ArbitrageOpportunity) {
    info!(
        "   💰 {} | {} | buy {:.2} → sell {:.2} | qty {} | net {:.0} ISK ({:.1}%) | risk {:.0} | {} jumps",
        opportunity.item_name,
        opportunity.route(),
        opportunity.buy_price,
        opportunity.sell_price,
        opportunity.quantity,
        opportunity.net_profit,
        opportunity.profit_pct,
        opportunity.risk_score,
        opportunity.jump_distance,
    );
}

pub fn print_session_stats(start_time: Instant, metrics: &ScanMetricsSummary) {
    let runtime = start_time.elapsed().as_secs() / 60;

    info!("\n📊 Session Statistics ({} minutes)", runtime);
    info!("   Scans completed: {}", metrics.scans_completed);
    info!("   Scans discarded (cancelled): {}", metrics.scans_discarded);
    info!("   Triggers ignored (in flight): {}", metrics.triggers_ignored);
    info!("   Items timed out: {}", metrics.items_timed_out);
    info!("   Opportunities found: {}", metrics.opportunities_found);
    info!("");
}

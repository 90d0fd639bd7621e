//! Regional Market Arbitrage Engine - Demo Harness
//!
//! Stands in for the companion-tool UI: wires a seeded sample feed into the
//! market store and drives the scan scheduler on a fixed cadence.

use anyhow::Result;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use tokio::time;
use tracing::{error, info, warn};
use region_arb_engine::CONFIG;
use region_arb_engine::detector::{OpportunityDetector, RecommendedCaps, StaticRouteTable};
use region_arb_engine::feed::{SampleFeed, SeededSampleFeed};
use region_arb_engine::scheduler::ScanScheduler;
use region_arb_engine::store::MarketDataStore;
use region_arb_engine::utils;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    utils::setup_output_directories()?;
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🛰️  Regional Market Arbitrage Engine v0.3.0");
    info!("📋 Configuration:");
    info!("   Min Profit: {} ISK", config.min_profit_threshold);
    info!("   Min Margin: {}%", config.min_margin_pct);
    info!("   Max Jumps: {}", config.max_jumps);
    info!("   Min Liquidity: {} units", config.min_liquidity_volume);
    info!("   Broker Fee: {} (both legs)", config.broker_fee_rate);
    info!("   Sales Tax: {} (sell leg)", config.tax_rate);
    info!("   Top N: {}", config.top_n);
    info!("   Scan Interval: {:?}", config.scan_interval);

    // Initialize components
    let seed = env::var("SAMPLE_FEED_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    let feed = SeededSampleFeed::new(seed);
    info!("   Sample Feed Seed: {}", seed);

    let routes = StaticRouteTable::new(12)
        .with_route("The Forge", "Domain", 9)
        .with_route("The Forge", "Sinq Laison", 13)
        .with_route("The Forge", "Heimatar", 8)
        .with_route("The Forge", "Metropolis", 9)
        .with_route("Domain", "Sinq Laison", 10)
        .with_route("Domain", "Heimatar", 7)
        .with_route("Domain", "Metropolis", 9)
        .with_route("Sinq Laison", "Heimatar", 11)
        .with_route("Sinq Laison", "Metropolis", 12)
        .with_route("Heimatar", "Metropolis", 2);

    let store = Arc::new(MarketDataStore::new());
    let detector = Arc::new(OpportunityDetector::new(
        Arc::new(routes),
        RecommendedCaps::default(),
    ));
    let scheduler = Arc::new(ScanScheduler::new(
        Arc::clone(&store),
        detector,
        config.clone(),
    ));

    // Setup shutdown handler
    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel();
    let shutdown_tx = Arc::new(tokio::sync::Mutex::new(Some(shutdown_tx)));

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("\n📛 Received shutdown signal (Ctrl+C)...");
        if let Some(tx) = shutdown_tx.lock().await.take() {
            let _ = tx.send(());
        }
    });

    info!("\n🚀 Starting scan loop...\n");

    let start_time = Instant::now();
    let mut interval = time::interval(config.scan_interval);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                run_scan_cycle(&feed, &store, &scheduler).await;
            }
            _ = &mut shutdown_rx => {
                info!("Shutdown signal received, exiting scan loop...");
                break;
            }
        }
    }

    utils::print_session_stats(start_time, &scheduler.metrics.summary());
    Ok(())
}

/// One feed refresh followed by one scan trigger. A feed failure keeps the
/// prior snapshot and only flags it stale.
async fn run_scan_cycle(
    feed: &SeededSampleFeed,
    store: &Arc<MarketDataStore>,
    scheduler: &Arc<ScanScheduler>,
) {
    match feed.fetch_samples().await {
        Ok(batch) => {
            let (accepted, rejected) = store.upsert_all(batch).await;
            if rejected > 0 {
                warn!("feed delivered {} malformed samples ({} accepted)", rejected, accepted);
            }

            if scheduler.trigger_scan().await {
                if let Some(snapshot) = scheduler.latest().await {
                    utils::print_scan_snapshot(&snapshot);
                    match serde_json::to_string(snapshot.as_ref()) {
                        Ok(json) => tracing::debug!(snapshot = %json, "published snapshot"),
                        Err(e) => error!("failed to serialize snapshot: {}", e),
                    }
                }
            }
        }
        Err(e) => {
            error!("feed refresh failed: {}", e);
            scheduler.mark_stale().await;
        }
    }
}

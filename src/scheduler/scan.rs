//! Scan orchestration: single-flight execution and snapshot publication

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use crate::config::{ITEM_SCAN_TIMEOUT_MS, ScanConfig};
use crate::detector::OpportunityDetector;
use crate::ranking::rank_opportunities;
use crate::stats::calculate_regional_statistics;
use crate::store::MarketDataStore;
use crate::types::ScanSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
}

/// Cumulative scheduler counters, readable at any time.
#[derive(Debug, Default)]
pub struct ScanMetrics {
    pub scans_completed: AtomicU64,
    pub scans_discarded: AtomicU64,
    pub triggers_ignored: AtomicU64,
    pub items_timed_out: AtomicU64,
    pub opportunities_found: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct ScanMetricsSummary {
    pub scans_completed: u64,
    pub scans_discarded: u64,
    pub triggers_ignored: u64,
    pub items_timed_out: u64,
    pub opportunities_found: u64,
}

impl ScanMetrics {
    pub fn summary(&self) -> ScanMetricsSummary {
        ScanMetricsSummary {
            scans_completed: self.scans_completed.load(Ordering::Relaxed),
            scans_discarded: self.scans_discarded.load(Ordering::Relaxed),
            triggers_ignored: self.triggers_ignored.load(Ordering::Relaxed),
            items_timed_out: self.items_timed_out.load(Ordering::Relaxed),
            opportunities_found: self.opportunities_found.load(Ordering::Relaxed),
        }
    }
}

/// Coordinates full rescans over the market store.
///
/// States run Idle → Scanning → Idle; failures and cancellations return to
/// Idle with the previously published snapshot retained. The scheduler owns
/// no timer: cadence belongs to whoever calls [`ScanScheduler::trigger_scan`].
pub struct ScanScheduler {
    store: Arc<MarketDataStore>,
    detector: Arc<OpportunityDetector>,
    config: ScanConfig,
    scanning: AtomicBool,
    cancelled: AtomicBool,
    published: RwLock<Option<Arc<ScanSnapshot>>>,
    pub metrics: ScanMetrics,
}

impl ScanScheduler {
    pub fn new(
        store: Arc<MarketDataStore>,
        detector: Arc<OpportunityDetector>,
        config: ScanConfig,
    ) -> Self {
        Self {
            store,
            detector,
            config,
            scanning: AtomicBool::new(false),
            cancelled: AtomicBool::new(false),
            published: RwLock::new(None),
            metrics: ScanMetrics::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        if self.scanning.load(Ordering::SeqCst) {
            ScanState::Scanning
        } else {
            ScanState::Idle
        }
    }

    /// Requests that the in-flight scan abort instead of publishing. Has no
    /// effect on scans triggered after the flag is observed; each trigger
    /// starts with a clear flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// The most recently published snapshot, if any scan has completed.
    pub async fn latest(&self) -> Option<Arc<ScanSnapshot>> {
        self.published.read().await.clone()
    }

    /// Runs one full scan cycle and publishes its snapshot.
    ///
    /// Single-flight: a call arriving while a scan is in progress is a no-op
    /// that returns immediately; it never queues a second scan and never
    /// blocks the caller. Returns true only when this call published.
    pub async fn trigger_scan(&self) -> bool {
        if self
            .scanning
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            self.metrics.triggers_ignored.fetch_add(1, Ordering::Relaxed);
            debug!("scan already in flight, ignoring trigger");
            return false;
        }

        self.cancelled.store(false, Ordering::SeqCst);
        let published = self.run_scan().await;
        self.scanning.store(false, Ordering::SeqCst);
        published
    }

    async fn run_scan(&self) -> bool {
        let market = self.store.snapshot().await;
        let mut item_names: Vec<String> = market.items().map(String::from).collect();
        item_names.sort();

        let deadline = Duration::from_millis(ITEM_SCAN_TIMEOUT_MS);
        let mut tasks = JoinSet::new();

        // Items are independent; fan out one worker per item and join the
        // full set before anything is published.
        for item in item_names {
            if self.cancelled.load(Ordering::SeqCst) {
                break;
            }
            let samples = market.samples_for(&item);
            let detector = Arc::clone(&self.detector);
            let config = self.config.clone();
            tasks.spawn(async move {
                tokio::time::timeout(
                    deadline,
                    tokio::task::spawn_blocking(move || {
                        let stats = calculate_regional_statistics(&item, &samples);
                        let opportunities = detector.detect_for_item(&item, &samples, &config);
                        (item, stats, opportunities)
                    }),
                )
                .await
            });
        }

        let mut statistics = HashMap::new();
        let mut candidates = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(Ok((item, stats, opportunities)))) => {
                    statistics.insert(item, stats);
                    candidates.extend(opportunities);
                }
                Ok(Err(_elapsed)) => {
                    self.metrics.items_timed_out.fetch_add(1, Ordering::Relaxed);
                    warn!("item scan exceeded deadline, excluding it from this cycle");
                }
                Ok(Ok(Err(e))) => {
                    warn!(error = %e, "item scan worker failed");
                }
                Err(e) => {
                    warn!(error = %e, "item scan task failed to join");
                }
            }
        }

        if self.cancelled.load(Ordering::SeqCst) {
            self.metrics.scans_discarded.fetch_add(1, Ordering::Relaxed);
            info!("scan cancelled, discarding results and keeping the prior snapshot");
            return false;
        }

        let ranked = rank_opportunities(candidates, self.config.top_n);
        let snapshot = Arc::new(ScanSnapshot {
            scan_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            stale: false,
            opportunities: ranked.opportunities,
            statistics,
            best_margin_pct: ranked.best_margin_pct,
            best_route: ranked.best_route,
            total_opportunity_count: ranked.total_opportunity_count,
        });

        self.metrics.scans_completed.fetch_add(1, Ordering::Relaxed);
        self.metrics
            .opportunities_found
            .fetch_add(snapshot.total_opportunity_count as u64, Ordering::Relaxed);

        info!(
            scan_id = %snapshot.scan_id,
            items = snapshot.statistics.len(),
            opportunities = snapshot.total_opportunity_count,
            best_margin_pct = %snapshot.best_margin_pct,
            "scan complete, publishing snapshot"
        );

        // Single reference swap: readers hold either the old Arc or this one.
        *self.published.write().await = Some(snapshot);
        true
    }

    /// Flags the current snapshot as stale after an upstream feed failure.
    /// The snapshot content is retained untouched; a copy with the stale bit
    /// raised replaces it, so existing readers are never mutated in place.
    pub async fn mark_stale(&self) {
        let mut slot = self.published.write().await;
        if let Some(current) = slot.as_ref() {
            if !current.stale {
                let mut copy = ScanSnapshot::clone(current);
                copy.stale = true;
                warn!(scan_id = %copy.scan_id, "marking published snapshot stale");
                *slot = Some(Arc::new(copy));
            }
        }
    }
}

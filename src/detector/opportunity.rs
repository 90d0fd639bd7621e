//! Cross-region arbitrage opportunity detection

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::debug;
use crate::config::ScanConfig;
use crate::profit::calculate_trade_profit;
use crate::risk::score_route;
use crate::types::{ArbitrageOpportunity, PriceSample};
use super::{RecommendedCaps, RouteProvider, estimated_travel_time};

/// Finds buy-low/sell-high pairings for one item across its observed regions.
///
/// Only the single cheapest region is ever used as the buy source per item
/// ("buy at the floor, sell at any premium region"); premium source regions
/// are deliberately not paired against each other.
pub struct OpportunityDetector {
    routes: Arc<dyn RouteProvider>,
    caps: RecommendedCaps,
}

impl OpportunityDetector {
    pub fn new(routes: Arc<dyn RouteProvider>, caps: RecommendedCaps) -> Self {
        Self { routes, caps }
    }

    /// Evaluates every premium region against the price floor and emits the
    /// candidates that clear the configured liquidity, margin, distance, and
    /// profit thresholds. Deterministic for fixed samples and config.
    pub fn detect_for_item(
        &self,
        item_name: &str,
        samples: &[PriceSample],
        config: &ScanConfig,
    ) -> Vec<ArbitrageOpportunity> {
        if samples.len() < 2 {
            return Vec::new();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.region.cmp(&b.region)));
        let source = &sorted[0];

        if source.price <= Decimal::ZERO {
            debug!(
                item = %item_name,
                region = %source.region,
                "skipping item with a zero-priced floor"
            );
            return Vec::new();
        }

        let cap = self.caps.cap_for(item_name);
        let mut opportunities = Vec::new();

        for target in &sorted[1..] {
            if target.volume < config.min_liquidity_volume {
                continue;
            }

            let gross_margin_pct =
                ((target.price - source.price) / source.price) * dec!(100);
            if gross_margin_pct < config.min_margin_pct {
                continue;
            }

            let jump_distance = self.routes.jump_distance(&source.region, &target.region);
            if jump_distance > config.max_jumps {
                continue;
            }

            let quantity = source.volume.min(target.volume).min(cap);
            if quantity == 0 {
                continue;
            }

            let breakdown =
                calculate_trade_profit(source.price, target.price, quantity, config);
            if breakdown.net_profit < config.min_profit_threshold {
                continue;
            }

            let risk_score = score_route(
                source.price,
                target.price,
                source.volume,
                target.volume,
                jump_distance,
            );

            opportunities.push(ArbitrageOpportunity {
                item_name: item_name.to_string(),
                source_region: source.region.clone(),
                target_region: target.region.clone(),
                buy_price: source.price,
                sell_price: target.price,
                quantity,
                gross_margin_pct,
                broker_fees: breakdown.broker_fees,
                taxes: breakdown.taxes,
                net_profit: breakdown.net_profit,
                profit_pct: breakdown.profit_pct,
                risk_score,
                jump_distance,
                estimated_travel_time: estimated_travel_time(jump_distance),
            });
        }

        opportunities
    }
}

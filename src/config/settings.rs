//! Scan configuration and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;
use std::time::Duration;

// Configuration constants
pub const DEFAULT_MIN_PROFIT_ISK: Decimal = dec!(50000);
pub const DEFAULT_MIN_MARGIN_PCT: Decimal = dec!(5);
pub const DEFAULT_BROKER_FEE_RATE: Decimal = dec!(0.03); // applied to both legs
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.08); // sell leg only
pub const MAX_FEE_RATE: Decimal = dec!(0.25);
pub const DEFAULT_MAX_JUMPS: u32 = 10;
pub const DEFAULT_MIN_LIQUIDITY_VOLUME: u64 = 100_000;
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_SCAN_INTERVAL_SECS: u64 = 30;

// Detection constants
pub const DEFAULT_TRADE_CAP: u64 = 1_000_000; // units per route
pub const MINUTES_PER_JUMP: u64 = 3;
pub const ITEM_SCAN_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub min_profit_threshold: Decimal,
    pub min_margin_pct: Decimal,
    pub max_jumps: u32,
    pub min_liquidity_volume: u64,
    pub broker_fee_rate: Decimal,
    pub tax_rate: Decimal,
    pub top_n: usize,
    pub scan_interval: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_profit_threshold: DEFAULT_MIN_PROFIT_ISK,
            min_margin_pct: DEFAULT_MIN_MARGIN_PCT,
            max_jumps: DEFAULT_MAX_JUMPS,
            min_liquidity_volume: DEFAULT_MIN_LIQUIDITY_VOLUME,
            broker_fee_rate: DEFAULT_BROKER_FEE_RATE,
            tax_rate: DEFAULT_TAX_RATE,
            top_n: DEFAULT_TOP_N,
            scan_interval: Duration::from_secs(DEFAULT_SCAN_INTERVAL_SECS),
        }
    }
}

impl ScanConfig {
    pub fn load() -> Self {
        Self {
            min_profit_threshold: env::var("MIN_PROFIT_ISK")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_MIN_PROFIT_ISK)
                .max(dec!(0)),
            min_margin_pct: env::var("MIN_MARGIN_PCT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_MIN_MARGIN_PCT)
                .max(dec!(0)),
            max_jumps: env::var("MAX_JUMPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_JUMPS),
            min_liquidity_volume: env::var("MIN_LIQUIDITY_VOLUME")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_LIQUIDITY_VOLUME),
            broker_fee_rate: env::var("BROKER_FEE_RATE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_BROKER_FEE_RATE)
                .max(dec!(0))
                .min(MAX_FEE_RATE),
            tax_rate: env::var("TAX_RATE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_TAX_RATE)
                .max(dec!(0))
                .min(MAX_FEE_RATE),
            top_n: env::var("TOP_N")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOP_N)
                .max(1),
            scan_interval: Duration::from_secs(
                env::var("SCAN_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SCAN_INTERVAL_SECS)
                    .max(1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_in_game_rates() {
        let config = ScanConfig::default();
        assert_eq!(config.broker_fee_rate, dec!(0.03));
        assert_eq!(config.tax_rate, dec!(0.08));
        assert_eq!(config.min_margin_pct, dec!(5));
    }
}

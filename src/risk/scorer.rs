//! Heuristic route risk scoring

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

// Scoring weights. These are a calibrated heuristic, not a statistical
// model; tests pin the clamp boundaries.
pub const LIQUIDITY_RISK_CEILING: Decimal = dec!(50);
pub const VOLATILITY_RISK_WEIGHT: Decimal = dec!(20);
pub const ROUTE_RISK_PER_JUMP: Decimal = dec!(1.5);
pub const MAX_RISK_SCORE: Decimal = dec!(100);

/// Combines liquidity depth on the thinner side, relative price spread, and
/// route length into one score, clamped to [0, 100].
pub fn score_route(
    buy_price: Decimal,
    sell_price: Decimal,
    source_volume: u64,
    target_volume: u64,
    jump_distance: u32,
) -> Decimal {
    let thin_side = Decimal::from(source_volume.min(target_volume));
    let liquidity_risk = (LIQUIDITY_RISK_CEILING - thin_side / dec!(100)).max(Decimal::ZERO);

    let price_ceiling = buy_price.max(sell_price);
    let volatility_risk = if price_ceiling > Decimal::ZERO {
        ((sell_price - buy_price).abs() / price_ceiling) * VOLATILITY_RISK_WEIGHT
    } else {
        Decimal::ZERO
    };

    let route_risk = Decimal::from(jump_distance) * ROUTE_RISK_PER_JUMP;

    (liquidity_risk + volatility_risk + route_risk).min(MAX_RISK_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deep_books_and_short_routes_score_low() {
        // 1M+ units on both sides kills the liquidity term entirely
        let score = score_route(dec!(5.00), dec!(5.10), 2_000_000, 1_500_000, 1);
        assert!(score < dec!(3));
    }

    #[test]
    fn empty_books_hit_the_liquidity_ceiling() {
        let score = score_route(dec!(100), dec!(100), 0, 0, 0);
        assert_eq!(score, LIQUIDITY_RISK_CEILING);
    }

    #[test]
    fn long_haul_thin_market_clamps_at_100() {
        let score = score_route(dec!(1), dec!(1000), 1, 1, 60);
        assert_eq!(score, MAX_RISK_SCORE);
    }

    #[test]
    fn zero_prices_contribute_no_volatility_risk() {
        let score = score_route(dec!(0), dec!(0), 10_000_000, 10_000_000, 0);
        assert_eq!(score, dec!(0));
    }

    proptest! {
        #[test]
        fn score_is_always_within_bounds(
            buy in 0u64..10_000_000,
            sell in 0u64..10_000_000,
            source_volume in 0u64..100_000_000,
            target_volume in 0u64..100_000_000,
            jumps in 0u32..1000,
        ) {
            let score = score_route(
                Decimal::from(buy),
                Decimal::from(sell),
                source_volume,
                target_volume,
                jumps,
            );
            prop_assert!(score >= Decimal::ZERO);
            prop_assert!(score <= MAX_RISK_SCORE);
        }
    }
}

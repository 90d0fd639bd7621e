//! Opportunity ranking and scan aggregation

use rust_decimal::Decimal;
use crate::types::ArbitrageOpportunity;

/// Ordered, truncated opportunity list plus the aggregates computed over the
/// full filtered set (aggregation happens before top-N truncation).
#[derive(Debug, Clone)]
pub struct RankedScan {
    pub opportunities: Vec<ArbitrageOpportunity>,
    pub best_margin_pct: Decimal,
    pub best_route: Option<String>,
    pub total_opportunity_count: usize,
}

/// Sorts candidates best-first: profit percent descending, net profit
/// descending, then item name ascending so equal-profit routes keep a stable
/// order across runs.
pub fn rank_opportunities(
    mut candidates: Vec<ArbitrageOpportunity>,
    top_n: usize,
) -> RankedScan {
    candidates.sort_by(|a, b| {
        b.profit_pct
            .cmp(&a.profit_pct)
            .then_with(|| b.net_profit.cmp(&a.net_profit))
            .then_with(|| a.item_name.cmp(&b.item_name))
    });

    let total_opportunity_count = candidates.len();
    let best = candidates
        .iter()
        .max_by(|a, b| a.gross_margin_pct.cmp(&b.gross_margin_pct));
    let best_margin_pct = best.map(|o| o.gross_margin_pct).unwrap_or(Decimal::ZERO);
    let best_route = best.map(ArbitrageOpportunity::route);

    candidates.truncate(top_n);

    RankedScan {
        opportunities: candidates,
        best_margin_pct,
        best_route,
        total_opportunity_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn opp(item: &str, profit_pct: Decimal, net_profit: Decimal, margin: Decimal) -> ArbitrageOpportunity {
        ArbitrageOpportunity {
            item_name: item.to_string(),
            source_region: "The Forge".to_string(),
            target_region: "Domain".to_string(),
            buy_price: dec!(5),
            sell_price: dec!(6),
            quantity: 1000,
            gross_margin_pct: margin,
            broker_fees: dec!(0),
            taxes: dec!(0),
            net_profit,
            profit_pct,
            risk_score: dec!(10),
            jump_distance: 3,
            estimated_travel_time: Duration::from_secs(540),
        }
    }

    #[test]
    fn sorts_by_profit_pct_then_net_profit_then_item() {
        let candidates = vec![
            opp("Pyerite", dec!(8), dec!(100), dec!(10)),
            opp("Tritanium", dec!(12), dec!(50), dec!(14)),
            opp("Mexallon", dec!(8), dec!(400), dec!(9)),
            opp("Isogen", dec!(8), dec!(100), dec!(11)),
        ];
        let ranked = rank_opportunities(candidates, 10);

        let order: Vec<&str> = ranked
            .opportunities
            .iter()
            .map(|o| o.item_name.as_str())
            .collect();
        assert_eq!(order, ["Tritanium", "Mexallon", "Isogen", "Pyerite"]);
    }

    #[test]
    fn aggregates_cover_the_full_set_not_just_top_n() {
        let candidates = vec![
            opp("Tritanium", dec!(12), dec!(500), dec!(14)),
            opp("Pyerite", dec!(9), dec!(300), dec!(40)),
            opp("Mexallon", dec!(7), dec!(200), dec!(8)),
        ];
        let ranked = rank_opportunities(candidates, 1);

        assert_eq!(ranked.opportunities.len(), 1);
        assert_eq!(ranked.opportunities[0].item_name, "Tritanium");
        // best margin belongs to a truncated-away entry
        assert_eq!(ranked.best_margin_pct, dec!(40));
        assert_eq!(ranked.best_route.as_deref(), Some("The Forge → Domain"));
        assert_eq!(ranked.total_opportunity_count, 3);
    }

    #[test]
    fn empty_candidate_set_has_zero_aggregates() {
        let ranked = rank_opportunities(Vec::new(), 5);
        assert!(ranked.opportunities.is_empty());
        assert_eq!(ranked.best_margin_pct, dec!(0));
        assert_eq!(ranked.best_route, None);
        assert_eq!(ranked.total_opportunity_count, 0);
    }
}

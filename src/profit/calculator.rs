//! Trade profit calculation with broker fees and sales tax

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;
use crate::config::ScanConfig;

/// Cost/fee/profit breakdown for one candidate trade. Inputs are
/// pre-validated by the detector (non-negative prices, positive quantity),
/// so there are no error conditions here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitBreakdown {
    pub total_cost: Decimal,
    pub total_revenue: Decimal,
    pub broker_fees: Decimal,
    pub taxes: Decimal,
    pub net_profit: Decimal,
    pub profit_pct: Decimal,
}

/// Broker fee is charged on both the buy and the sell leg; sales tax only on
/// the sell leg.
pub fn calculate_trade_profit(
    buy_price: Decimal,
    sell_price: Decimal,
    quantity: u64,
    config: &ScanConfig,
) -> ProfitBreakdown {
    let qty = Decimal::from(quantity);
    let total_cost = buy_price * qty;
    let total_revenue = sell_price * qty;

    let broker_fees = config.broker_fee_rate * total_cost + config.broker_fee_rate * total_revenue;
    let taxes = config.tax_rate * total_revenue;
    let net_profit = total_revenue - total_cost - broker_fees - taxes;

    let profit_pct = if total_cost > dec!(0) {
        (net_profit / total_cost) * dec!(100)
    } else {
        dec!(0)
    };

    ProfitBreakdown {
        total_cost,
        total_revenue,
        broker_fees,
        taxes,
        net_profit,
        profit_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tritanium_forge_to_domain_breakdown() {
        // 1M units bought at 5.00, sold at 6.50, 3% broker both legs, 8% tax
        let config = ScanConfig::default();
        let breakdown = calculate_trade_profit(dec!(5.00), dec!(6.50), 1_000_000, &config);

        assert_eq!(breakdown.total_cost, dec!(5000000.00));
        assert_eq!(breakdown.total_revenue, dec!(6500000.00));
        assert_eq!(breakdown.broker_fees, dec!(345000.0000));
        assert_eq!(breakdown.taxes, dec!(520000.0000));
        assert_eq!(breakdown.net_profit, dec!(635000.0000));
        assert_eq!(breakdown.profit_pct, dec!(12.70));
    }

    #[test]
    fn zero_cost_trade_has_zero_profit_pct() {
        let config = ScanConfig::default();
        let breakdown = calculate_trade_profit(dec!(0), dec!(10), 100, &config);
        assert_eq!(breakdown.profit_pct, dec!(0));
    }

    #[test]
    fn fees_can_turn_a_thin_margin_negative() {
        let config = ScanConfig::default();
        // 2% gross margin cannot survive 3%+3% broker and 8% tax
        let breakdown = calculate_trade_profit(dec!(100), dec!(102), 1000, &config);
        assert!(breakdown.net_profit < dec!(0));
    }
}

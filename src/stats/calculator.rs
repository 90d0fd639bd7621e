//! Regional price dispersion statistics

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::types::{PriceSample, RegionalStatistics};

/// Computes mean, population variance derived std-dev, and coefficient of
/// variation for one item across all of its observed regions.
///
/// Zero or one sample degrades to zero variance; a zero mean degrades to a
/// zero CV rather than dividing by zero.
pub fn calculate_regional_statistics(
    item_name: &str,
    samples: &[PriceSample],
) -> RegionalStatistics {
    let region_count = samples.len();
    if region_count == 0 {
        return RegionalStatistics {
            item_name: item_name.to_string(),
            mean_price: dec!(0),
            std_dev: dec!(0),
            coefficient_of_variation_pct: dec!(0),
            region_count: 0,
        };
    }

    let prices: Vec<f64> = samples
        .iter()
        .map(|s| s.price.to_f64().unwrap_or(0.0))
        .collect();
    let mean: f64 = prices.iter().sum::<f64>() / prices.len() as f64;
    let variance: f64 =
        prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / prices.len() as f64;
    let std_dev = variance.sqrt();

    let cv_pct = if mean > 0.0 {
        (std_dev / mean) * 100.0
    } else {
        0.0
    };

    RegionalStatistics {
        item_name: item_name.to_string(),
        mean_price: Decimal::from_f64(mean).unwrap_or(dec!(0)),
        std_dev: Decimal::from_f64(std_dev).unwrap_or(dec!(0)),
        coefficient_of_variation_pct: Decimal::from_f64(cv_pct).unwrap_or(dec!(0)),
        region_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceSample;
    use rust_decimal_macros::dec;

    #[test]
    fn no_samples_degrades_to_zeroes() {
        let stats = calculate_regional_statistics("Tritanium", &[]);
        assert_eq!(stats.mean_price, dec!(0));
        assert_eq!(stats.std_dev, dec!(0));
        assert_eq!(stats.coefficient_of_variation_pct, dec!(0));
        assert_eq!(stats.region_count, 0);
    }

    #[test]
    fn single_sample_has_zero_dispersion() {
        let samples = [PriceSample::new("Zydrine", "Domain", dec!(1350), 40_000)];
        let stats = calculate_regional_statistics("Zydrine", &samples);
        assert_eq!(stats.mean_price, dec!(1350));
        assert_eq!(stats.std_dev, dec!(0));
        assert_eq!(stats.coefficient_of_variation_pct, dec!(0));
        assert_eq!(stats.region_count, 1);
    }

    #[test]
    fn two_samples_use_population_variance() {
        let samples = [
            PriceSample::new("Mexallon", "The Forge", dec!(70), 100_000),
            PriceSample::new("Mexallon", "Heimatar", dec!(90), 100_000),
        ];
        let stats = calculate_regional_statistics("Mexallon", &samples);
        // mean 80, population variance 100, std dev 10, CV 12.5%
        assert_eq!(stats.mean_price, dec!(80));
        assert_eq!(stats.std_dev, dec!(10));
        assert_eq!(stats.coefficient_of_variation_pct, dec!(12.5));
    }

    #[test]
    fn zero_mean_guards_against_division_by_zero() {
        let samples = [
            PriceSample::new("Expired Cerebral Accelerator", "Domain", dec!(0), 10),
            PriceSample::new("Expired Cerebral Accelerator", "The Forge", dec!(0), 20),
        ];
        let stats = calculate_regional_statistics("Expired Cerebral Accelerator", &samples);
        assert_eq!(stats.coefficient_of_variation_pct, dec!(0));
    }
}

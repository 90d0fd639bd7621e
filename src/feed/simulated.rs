//! Seeded sample generator for the demo harness and test fixtures

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Mutex;
use crate::errors::EngineResult;
use crate::types::PriceSample;
use super::SampleFeed;

/// One entry in the simulated market catalog: an item and its reference
/// price, jittered per region on every fetch.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub item_name: String,
    pub base_price: Decimal,
}

/// Deterministic market feed: the same seed always produces the same sample
/// sequence. Lives outside every production scan path; only the demo binary
/// and test fixtures construct one.
pub struct SeededSampleFeed {
    catalog: Vec<CatalogEntry>,
    regions: Vec<String>,
    rng: Mutex<StdRng>,
}

impl SeededSampleFeed {
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, default_catalog(), default_regions())
    }

    pub fn with_catalog(seed: u64, catalog: Vec<CatalogEntry>, regions: Vec<String>) -> Self {
        Self {
            catalog,
            regions,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl SampleFeed for SeededSampleFeed {
    async fn fetch_samples(&self) -> EngineResult<Vec<PriceSample>> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut samples = Vec::with_capacity(self.catalog.len() * self.regions.len());

        for entry in &self.catalog {
            for region in &self.regions {
                let jitter = rng.random_range(0.82..1.22);
                let price = entry.base_price
                    * Decimal::from_f64(jitter).unwrap_or(dec!(1));
                let volume = rng.random_range(50_000..4_000_000);
                samples.push(PriceSample::new(
                    &entry.item_name,
                    region,
                    price.round_dp(2),
                    volume,
                ));
            }
        }

        Ok(samples)
    }
}

fn default_catalog() -> Vec<CatalogEntry> {
    [
        ("Tritanium", dec!(5.20)),
        ("Pyerite", dec!(11.80)),
        ("Mexallon", dec!(80.00)),
        ("Isogen", dec!(140.00)),
        ("Nocxium", dec!(800.00)),
        ("Zydrine", dec!(1350.00)),
        ("Megacyte", dec!(2600.00)),
    ]
    .into_iter()
    .map(|(name, base_price)| CatalogEntry {
        item_name: name.to_string(),
        base_price,
    })
    .collect()
}

fn default_regions() -> Vec<String> {
    ["The Forge", "Domain", "Sinq Laison", "Heimatar", "Metropolis"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_seed_produces_identical_batches() {
        let a = SeededSampleFeed::new(42).fetch_samples().await.unwrap();
        let b = SeededSampleFeed::new(42).fetch_samples().await.unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.price, y.price);
            assert_eq!(x.volume, y.volume);
        }
    }

    #[tokio::test]
    async fn covers_every_item_region_pair() {
        let samples = SeededSampleFeed::new(7).fetch_samples().await.unwrap();
        assert_eq!(samples.len(), 7 * 5);
        assert!(samples.iter().all(|s| s.price > Decimal::ZERO));
    }
}

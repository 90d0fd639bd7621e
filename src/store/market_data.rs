//! In-memory market sample store with snapshot-on-read semantics

use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;
use crate::errors::{EngineError, EngineResult};
use crate::types::PriceSample;

/// Point-in-time copy of every stored sample, keyed item → region → sample.
///
/// A scan works entirely from one of these, so concurrent `upsert` calls can
/// never be observed mid-write.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    by_item: HashMap<String, HashMap<String, PriceSample>>,
}

impl MarketSnapshot {
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.by_item.keys().map(String::as_str)
    }

    pub fn samples_for(&self, item_name: &str) -> Vec<PriceSample> {
        self.by_item
            .get(item_name)
            .map(|regions| regions.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }
}

/// The only mutable shared resource in the engine. Writers replace samples
/// key-by-key; readers take a full copy via [`MarketDataStore::snapshot`].
pub struct MarketDataStore {
    samples: RwLock<HashMap<String, HashMap<String, PriceSample>>>,
}

impl MarketDataStore {
    pub fn new() -> Self {
        Self {
            samples: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a sample, replacing any existing sample for the same
    /// (item, region) pair. Malformed samples are rejected and leave the
    /// stored set untouched.
    pub async fn upsert(&self, sample: PriceSample) -> EngineResult<()> {
        if sample.item_name.is_empty() {
            return Err(EngineError::InvalidSample {
                item: sample.item_name.clone(),
                region: sample.region.clone(),
                reason: "empty item name".to_string(),
            });
        }
        if sample.region.is_empty() {
            return Err(EngineError::InvalidSample {
                item: sample.item_name.clone(),
                region: sample.region.clone(),
                reason: "empty region name".to_string(),
            });
        }
        if sample.price < Decimal::ZERO {
            return Err(EngineError::InvalidSample {
                item: sample.item_name.clone(),
                region: sample.region.clone(),
                reason: format!("negative price {}", sample.price),
            });
        }

        let mut samples = self.samples.write().await;
        samples
            .entry(sample.item_name.clone())
            .or_default()
            .insert(sample.region.clone(), sample);
        Ok(())
    }

    /// Batch upsert for feed deliveries. Returns (accepted, rejected) counts;
    /// each rejection is logged and does not affect the rest of the batch.
    pub async fn upsert_all(&self, batch: Vec<PriceSample>) -> (usize, usize) {
        let mut accepted = 0;
        let mut rejected = 0;
        for sample in batch {
            match self.upsert(sample).await {
                Ok(()) => accepted += 1,
                Err(e) => {
                    rejected += 1;
                    warn!("rejected market sample: {}", e);
                }
            }
        }
        (accepted, rejected)
    }

    /// All current samples for one item, in no particular order. Unknown
    /// items yield an empty vec, not an error.
    pub async fn samples_for(&self, item_name: &str) -> Vec<PriceSample> {
        self.samples
            .read()
            .await
            .get(item_name)
            .map(|regions| regions.values().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            by_item: self.samples.read().await.clone(),
        }
    }

    pub async fn sample_count(&self) -> usize {
        self.samples.read().await.values().map(HashMap::len).sum()
    }
}

impl Default for MarketDataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn upsert_replaces_same_key() {
        let store = MarketDataStore::new();
        store
            .upsert(PriceSample::new("Tritanium", "The Forge", dec!(5.0), 1000))
            .await
            .unwrap();
        store
            .upsert(PriceSample::new("Tritanium", "The Forge", dec!(5.5), 2000))
            .await
            .unwrap();

        let samples = store.samples_for("Tritanium").await;
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].price, dec!(5.5));
        assert_eq!(samples[0].volume, 2000);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_without_touching_stored_samples() {
        let store = MarketDataStore::new();
        store
            .upsert(PriceSample::new("Pyerite", "Domain", dec!(11.8), 500))
            .await
            .unwrap();

        let result = store
            .upsert(PriceSample::new("Pyerite", "Domain", dec!(-1), 500))
            .await;
        assert!(matches!(result, Err(EngineError::InvalidSample { .. })));

        let samples = store.samples_for("Pyerite").await;
        assert_eq!(samples[0].price, dec!(11.8));
    }

    #[tokio::test]
    async fn unknown_item_yields_empty_vec() {
        let store = MarketDataStore::new();
        assert!(store.samples_for("Morphite").await.is_empty());
    }

    #[tokio::test]
    async fn snapshot_is_isolated_from_later_writes() {
        let store = MarketDataStore::new();
        store
            .upsert(PriceSample::new("Isogen", "Heimatar", dec!(140), 9000))
            .await
            .unwrap();

        let snap = store.snapshot().await;
        store
            .upsert(PriceSample::new("Isogen", "Heimatar", dec!(155), 9000))
            .await
            .unwrap();

        assert_eq!(snap.samples_for("Isogen")[0].price, dec!(140));
        assert_eq!(store.samples_for("Isogen").await[0].price, dec!(155));
    }
}

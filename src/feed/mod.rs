//! Injectable price sample feeds

pub mod simulated;

pub use simulated::*;

use async_trait::async_trait;
use crate::errors::EngineResult;
use crate::types::PriceSample;

/// Source of market observations. How samples are obtained (network call,
/// file, generator) is the implementor's concern; the engine only consumes
/// the batch and pushes it through [`crate::store::MarketDataStore::upsert`].
#[async_trait]
pub trait SampleFeed: Send + Sync {
    async fn fetch_samples(&self) -> EngineResult<Vec<PriceSample>>;
}

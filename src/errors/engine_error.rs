//! Custom error types for the engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid sample for {item} in {region}: {reason}")]
    InvalidSample {
        item: String,
        region: String,
        reason: String,
    },

    #[error("data feed error: {message}")]
    Feed {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

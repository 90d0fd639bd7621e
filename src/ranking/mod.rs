//! Ranking and aggregation

pub mod engine;

pub use engine::*;

//! Route risk assessment

pub mod scorer;

pub use scorer::*;

//! Profit calculation

pub mod calculator;

pub use calculator::*;

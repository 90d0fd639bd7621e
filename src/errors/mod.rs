//! Error handling for the scan engine

pub mod engine_error;

pub use engine_error::*;

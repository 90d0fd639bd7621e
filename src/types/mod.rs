//! Core data types and structures

pub mod sample;
pub mod opportunity;
pub mod statistics;
pub mod snapshot;

pub use sample::*;
pub use opportunity::*;
pub use statistics::*;
pub use snapshot::*;

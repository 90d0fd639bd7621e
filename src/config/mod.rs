//! Configuration management for the scan engine

pub mod settings;

pub use settings::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: ScanConfig = ScanConfig::load();
}

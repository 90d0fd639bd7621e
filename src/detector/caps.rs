//! Per-item recommended trade caps

use std::collections::HashMap;
use crate::config::DEFAULT_TRADE_CAP;

/// Recommended per-route quantity caps, bounding exposure to the less liquid
/// side of a trade. Items without an explicit entry use the default cap.
#[derive(Debug, Clone)]
pub struct RecommendedCaps {
    caps: HashMap<String, u64>,
    default_cap: u64,
}

impl RecommendedCaps {
    pub fn new(default_cap: u64) -> Self {
        Self {
            caps: HashMap::new(),
            default_cap,
        }
    }

    pub fn with_cap(mut self, item_name: &str, cap: u64) -> Self {
        self.caps.insert(item_name.to_string(), cap);
        self
    }

    pub fn cap_for(&self, item_name: &str) -> u64 {
        self.caps.get(item_name).copied().unwrap_or(self.default_cap)
    }
}

impl Default for RecommendedCaps {
    fn default() -> Self {
        Self::new(DEFAULT_TRADE_CAP)
    }
}

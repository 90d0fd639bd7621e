//! Route distance collaborator seam

use std::collections::HashMap;
use std::time::Duration;
use crate::config::MINUTES_PER_JUMP;

/// External collaborator supplying hop counts between regions. The in-game
/// jump graph behind it is not this crate's concern; the detector only
/// consumes the integer.
pub trait RouteProvider: Send + Sync {
    fn jump_distance(&self, source_region: &str, target_region: &str) -> u32;
}

/// Map-backed route table for demos and tests. Lookups are symmetric;
/// unknown pairs fall back to a default hop count.
pub struct StaticRouteTable {
    jumps: HashMap<(String, String), u32>,
    default_jumps: u32,
}

impl StaticRouteTable {
    pub fn new(default_jumps: u32) -> Self {
        Self {
            jumps: HashMap::new(),
            default_jumps,
        }
    }

    pub fn with_route(mut self, a: &str, b: &str, jumps: u32) -> Self {
        self.jumps.insert((a.to_string(), b.to_string()), jumps);
        self
    }
}

impl RouteProvider for StaticRouteTable {
    fn jump_distance(&self, source_region: &str, target_region: &str) -> u32 {
        if source_region == target_region {
            return 0;
        }
        let forward = (source_region.to_string(), target_region.to_string());
        let reverse = (target_region.to_string(), source_region.to_string());
        self.jumps
            .get(&forward)
            .or_else(|| self.jumps.get(&reverse))
            .copied()
            .unwrap_or(self.default_jumps)
    }
}

/// Rough haul estimate from the hop count.
pub fn estimated_travel_time(jump_distance: u32) -> Duration {
    Duration::from_secs(u64::from(jump_distance) * MINUTES_PER_JUMP * 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_is_symmetric() {
        let table = StaticRouteTable::new(12).with_route("The Forge", "Domain", 9);
        assert_eq!(table.jump_distance("The Forge", "Domain"), 9);
        assert_eq!(table.jump_distance("Domain", "The Forge"), 9);
        assert_eq!(table.jump_distance("Domain", "Metropolis"), 12);
        assert_eq!(table.jump_distance("Domain", "Domain"), 0);
    }

    #[test]
    fn travel_time_scales_with_jumps() {
        assert_eq!(estimated_travel_time(0), Duration::ZERO);
        assert_eq!(
            estimated_travel_time(5),
            Duration::from_secs(5 * MINUTES_PER_JUMP * 60)
        );
    }
}

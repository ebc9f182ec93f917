//! Selector configuration
//!
//! Configuration is an explicit value handed to the selector at construction
//! time, so tests and callers can vary the target count and the denylist
//! without touching global state.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of zones a cluster spreads workers across by default
pub const DEFAULT_REQUIRED_ZONES: usize = 3;

/// Smallest zone spread worth running a cluster on
pub const MIN_REQUIRED_ZONES: usize = 2;

/// Zone names excluded from selection regardless of reported state
///
/// These zones are known to reject worker-node capacity for this workload.
const DEFAULT_ZONES_TO_AVOID: &[&str] = &["us-east1-a", "us-east1-b"];

/// Selection configuration
///
/// ## Defaults
///
/// - `required_zones`: [`DEFAULT_REQUIRED_ZONES`] (3)
/// - `zones_to_avoid`: the built-in denylist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Exact number of zone names a successful selection returns
    pub required_zones: usize,

    /// Zone names never returned, whatever state the provider reports
    pub zones_to_avoid: HashSet<String>,
}

impl SelectorConfig {
    /// Default denylist as an owned set
    pub fn default_zones_to_avoid() -> HashSet<String> {
        DEFAULT_ZONES_TO_AVOID.iter().map(|z| z.to_string()).collect()
    }

    /// Check whether a zone name is denylisted
    pub fn is_avoided(&self, zone_name: &str) -> bool {
        self.zones_to_avoid.contains(zone_name)
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            required_zones: DEFAULT_REQUIRED_ZONES,
            zones_to_avoid: Self::default_zones_to_avoid(),
        }
    }
}

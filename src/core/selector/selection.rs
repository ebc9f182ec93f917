//! Zone selection logic
//!
//! This module contains the core policy for turning a region's zone
//! inventory into a fixed-size placement list.

use std::sync::Arc;

use tracing::debug;

use super::config::{MIN_REQUIRED_ZONES, SelectorConfig};
use super::error::SelectorError;
use crate::core::traits::provider::ZoneProvider;

/// Selects availability zones for a regional cluster's worker nodes
///
/// Wraps a [`ZoneProvider`] capability plus a [`SelectorConfig`]. The
/// selector holds no per-call state, so one instance can serve concurrent
/// callers as long as the provider itself can.
pub struct AvailabilityZoneSelector {
    provider: Arc<dyn ZoneProvider>,
    config: SelectorConfig,
}

impl AvailabilityZoneSelector {
    /// Create a selector with an explicit configuration
    pub fn new(provider: Arc<dyn ZoneProvider>, config: SelectorConfig) -> Self {
        Self { provider, config }
    }

    /// Create a selector with the default configuration (3 zones)
    pub fn with_defaults(provider: Arc<dyn ZoneProvider>) -> Self {
        Self::new(provider, SelectorConfig::default())
    }

    /// Create a selector that asks for the minimum viable spread (2 zones)
    pub fn with_min_required(provider: Arc<dyn ZoneProvider>) -> Self {
        Self::new(
            provider,
            SelectorConfig {
                required_zones: MIN_REQUIRED_ZONES,
                ..SelectorConfig::default()
            },
        )
    }

    /// Current selection configuration
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select zones for placing worker nodes in a region
    ///
    /// # Flow
    ///
    /// 1. Query the provider for the region's zone inventory (one request)
    /// 2. Filter: state available + not denylisted, keeping provider order
    /// 3. Walk the eligible zones round-robin until the target count is met
    ///
    /// When the region has at least `required_zones` eligible zones the
    /// result is simply the first `required_zones` of them; with fewer, the
    /// walk wraps around so the result repeats names but always has the full
    /// length. Callers use the list as-is, duplicates included, to
    /// distribute workers.
    ///
    /// # Errors
    /// * [`SelectorError::ZoneDiscovery`] - the provider query failed
    /// * [`SelectorError::NoEligibleZones`] - the region has no usable zone
    pub async fn select_zones(&self, region: &str) -> Result<Vec<String>, SelectorError> {
        let zones = self
            .provider
            .describe_zones(region)
            .await
            .map_err(|source| SelectorError::ZoneDiscovery {
                region: region.to_string(),
                source,
            })?;

        debug!(region, discovered = zones.len(), "fetched zone inventory");

        let eligible: Vec<&str> = zones
            .iter()
            .filter(|zone| zone.state.is_available() && !self.config.is_avoided(&zone.name))
            .map(|zone| zone.name.as_str())
            .collect();

        if eligible.is_empty() {
            return Err(SelectorError::NoEligibleZones(region.to_string()));
        }

        let selected: Vec<String> = eligible
            .iter()
            .cycle()
            .take(self.config.required_zones)
            .map(|name| name.to_string())
            .collect();

        debug!(
            region,
            eligible = eligible.len(),
            selected = ?selected,
            "selected availability zones"
        );

        Ok(selected)
    }
}

//! Selection error types

use crate::core::traits::provider::BoxError;

/// Errors surfaced by [`AvailabilityZoneSelector::select_zones`]
///
/// Both variants are terminal for the call: the selector never retries and
/// never falls back to a partial result.
///
/// [`AvailabilityZoneSelector::select_zones`]: crate::core::selector::AvailabilityZoneSelector::select_zones
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// The provider's zone inventory query failed
    #[error("zone discovery failed for region {region}")]
    ZoneDiscovery {
        /// Region the query was issued for
        region: String,
        /// Underlying transport error, untouched
        #[source]
        source: BoxError,
    },

    /// The region has no zone that is both available and off the denylist
    #[error("no eligible availability zones found in region {0}")]
    NoEligibleZones(String),
}

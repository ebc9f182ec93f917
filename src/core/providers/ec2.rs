//! EC2 zone provider adapter
//!
//! Binds the zone-query capability to the EC2 `DescribeAvailabilityZones`
//! API. The request carries a single `region-name` filter; authentication
//! and transport configuration belong to the injected SDK client.

use async_trait::async_trait;
use aws_sdk_ec2::types::{AvailabilityZoneState, Filter};

use crate::core::traits::provider::{BoxError, ZoneProvider};
use crate::core::types::zone::{Zone, ZoneState};

/// Zone provider backed by an EC2 client
#[derive(Debug, Clone)]
pub struct Ec2ZoneProvider {
    client: aws_sdk_ec2::Client,
}

impl Ec2ZoneProvider {
    /// Wrap an existing EC2 client
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }

    /// Build a provider from ambient AWS configuration
    ///
    /// Credentials and the client's home region come from the usual
    /// environment/profile chain. The region queried by `describe_zones` is
    /// independent of the client's home region.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_ec2::Client::new(&config))
    }
}

#[async_trait]
impl ZoneProvider for Ec2ZoneProvider {
    async fn describe_zones(&self, region: &str) -> Result<Vec<Zone>, BoxError> {
        let output = self
            .client
            .describe_availability_zones()
            .filters(
                Filter::builder()
                    .name("region-name")
                    .values(region)
                    .build(),
            )
            .send()
            .await?;

        let zones = output
            .availability_zones()
            .iter()
            .filter_map(|az| {
                // Nameless records are unusable for placement
                let name = az.zone_name()?.to_string();
                Some(Zone {
                    region: az.region_name().unwrap_or(region).to_string(),
                    name,
                    state: map_state(az.state()),
                })
            })
            .collect();

        Ok(zones)
    }
}

/// Map the SDK's state enum onto [`ZoneState`]
///
/// States the SDK adds in the future map to `Unavailable`, which keeps them
/// ineligible for placement.
fn map_state(state: Option<&AvailabilityZoneState>) -> ZoneState {
    match state {
        Some(AvailabilityZoneState::Available) => ZoneState::Available,
        Some(AvailabilityZoneState::Information) => ZoneState::Information,
        Some(AvailabilityZoneState::Impaired) => ZoneState::Impaired,
        _ => ZoneState::Unavailable,
    }
}

//! Selector unit tests


use crate::core::types::zone::{Zone, ZoneState};

pub(crate) fn zone(region: &str, name: &str, state: ZoneState) -> Zone {
    Zone::new(region, name, state)
}

/// Zones carried on the default denylist, reported as available
pub(crate) fn avoided_zones() -> Vec<Zone> {
    vec![
        zone("us-east-1", "us-east1-a", ZoneState::Available),
        zone("us-east-1", "us-east1-b", ZoneState::Available),
    ]
}

pub(crate) fn us_east_1_zones() -> Vec<Zone> {
    let mut zones = avoided_zones();
    zones.push(zone("us-east-1", "us-east1-c", ZoneState::Available));
    zones
}

pub(crate) fn us_west_2_zones() -> Vec<Zone> {
    vec![
        zone("us-west-2", "us-west2-a", ZoneState::Available),
        zone("us-west-2", "us-west2-b", ZoneState::Available),
        zone("us-west-2", "us-west2-c", ZoneState::Available),
    ]
}

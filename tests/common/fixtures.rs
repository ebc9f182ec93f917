//! Zone fixtures

use az_selector::{Zone, ZoneState};

/// Zones on the default denylist, reported available by the provider
pub fn avoided_zones(state: ZoneState) -> Vec<Zone> {
    vec![
        Zone::new("us-east-1", "us-east1-a", state),
        Zone::new("us-east-1", "us-east1-b", state),
    ]
}

/// us-east-1 inventory: two denylisted zones plus one eligible
pub fn us_east_1_zones(state: ZoneState) -> Vec<Zone> {
    let mut zones = avoided_zones(state);
    zones.push(Zone::new("us-east-1", "us-east1-c", state));
    zones
}

/// us-west-2 inventory: three eligible zones
pub fn us_west_2_zones(state: ZoneState) -> Vec<Zone> {
    vec![
        Zone::new("us-west-2", "us-west2-a", state),
        Zone::new("us-west-2", "us-west2-b", state),
        Zone::new("us-west-2", "us-west2-c", state),
    ]
}

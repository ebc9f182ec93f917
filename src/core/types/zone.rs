//! Availability zone types
//!
//! This module defines the zone record returned by a provider inventory
//! query and the state enumeration used for eligibility filtering.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an availability zone
///
/// Mirrors the provider's state set. Only [`ZoneState::Available`] marks a
/// zone as usable for placement; every other state is ineligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneState {
    /// Zone is operating normally and accepts new capacity
    Available,
    /// Zone is operational but the provider has posted an advisory
    Information,
    /// Zone is experiencing degraded service
    Impaired,
    /// Zone is not accepting new capacity
    Unavailable,
}

impl ZoneState {
    /// Check if the state allows placing new workloads
    pub fn is_available(&self) -> bool {
        matches!(self, ZoneState::Available)
    }
}

/// A single availability zone from a provider inventory response
///
/// Zone records are read-only snapshots: they are created from one query
/// response, filtered, and discarded. Nothing mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Region the zone belongs to
    pub region: String,
    /// Zone name, unique within the region (e.g. "us-west-2a")
    pub name: String,
    /// Current lifecycle state
    pub state: ZoneState,
}

impl Zone {
    /// Create a zone record
    pub fn new(region: impl Into<String>, name: impl Into<String>, state: ZoneState) -> Self {
        Self {
            region: region.into(),
            name: name.into(),
            state,
        }
    }
}

//! Scripted zone provider
//!
//! A deterministic stand-in for a cloud client: returns one canned response
//! and counts invocations so tests can assert the selector queries exactly
//! once.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use az_selector::{BoxError, Zone, ZoneProvider};

#[derive(Debug)]
pub struct StaticZoneProvider {
    response: Result<Vec<Zone>, String>,
    calls: AtomicUsize,
}

impl StaticZoneProvider {
    /// Provider that answers every query with the given zones
    pub fn returning(zones: Vec<Zone>) -> Self {
        Self {
            response: Ok(zones),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that fails every query with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `describe_zones` has been called
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneProvider for StaticZoneProvider {
    async fn describe_zones(&self, _region: &str) -> Result<Vec<Zone>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(zones) => Ok(zones.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}

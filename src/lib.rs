//! # az-selector
//!
//! Availability zone selection for regional cluster provisioning.
//!
//! Given a region identifier and a zone-query capability, the selector picks
//! a fixed-size, ordered list of availability zone names for placing worker
//! nodes: zones must be in the `available` state, zones on a configured
//! denylist are skipped, and when a region has fewer distinct eligible zones
//! than the target count the result pads by repeating zones round-robin.
//!
//! ## Quick Start
//!
//! The provider capability is a single-method trait, so any inventory source
//! (or a test double) can back the selector:
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use az_selector::{AvailabilityZoneSelector, BoxError, Zone, ZoneProvider, ZoneState};
//!
//! #[derive(Debug)]
//! struct StaticInventory(Vec<Zone>);
//!
//! #[async_trait]
//! impl ZoneProvider for StaticInventory {
//!     async fn describe_zones(&self, _region: &str) -> Result<Vec<Zone>, BoxError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(StaticInventory(vec![
//!     Zone::new("us-west-2", "us-west-2a", ZoneState::Available),
//!     Zone::new("us-west-2", "us-west-2b", ZoneState::Available),
//!     Zone::new("us-west-2", "us-west-2c", ZoneState::Available),
//! ]));
//!
//! let selector = AvailabilityZoneSelector::with_defaults(provider);
//! let zones = selector.select_zones("us-west-2").await?;
//! assert_eq!(zones, vec!["us-west-2a", "us-west-2b", "us-west-2c"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## EC2 adapter
//!
//! With the `aws` feature enabled, [`Ec2ZoneProvider`] binds the capability to
//! the EC2 `DescribeAvailabilityZones` API:
//!
//! ```rust,ignore
//! let provider = Arc::new(Ec2ZoneProvider::from_env().await);
//! let selector = AvailabilityZoneSelector::with_defaults(provider);
//! let zones = selector.select_zones("us-west-2").await?;
//! ```

#![warn(clippy::all)]

pub mod core;

// Re-export main types
pub use crate::core::selector::{
    AvailabilityZoneSelector, DEFAULT_REQUIRED_ZONES, MIN_REQUIRED_ZONES, SelectorConfig,
    SelectorError,
};
pub use crate::core::traits::provider::{BoxError, ZoneProvider};
pub use crate::core::types::zone::{Zone, ZoneState};

#[cfg(feature = "aws")]
pub use crate::core::providers::ec2::Ec2ZoneProvider;

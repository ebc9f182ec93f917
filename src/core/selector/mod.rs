//! Availability zone selector
//!
//! Selection policy for picking worker-node placement zones out of a
//! region's inventory:
//!
//! - `config` - Selection configuration and the built-in denylist
//! - `error` - Selection error types
//! - `selection` - The selector and its zone-picking algorithm

pub mod config;
pub mod error;
pub mod selection;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_REQUIRED_ZONES, MIN_REQUIRED_ZONES, SelectorConfig};
pub use error::SelectorError;
pub use selection::AvailabilityZoneSelector;

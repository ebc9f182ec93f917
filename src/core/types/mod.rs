//! Shared data types
//!
//! Transport-agnostic types describing a provider's zone inventory.

pub mod zone;

pub use zone::{Zone, ZoneState};

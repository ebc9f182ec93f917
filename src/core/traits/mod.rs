//! Core trait definitions
//!
//! Seams between the selector and the outside world.

pub mod provider;

pub use provider::{BoxError, ZoneProvider};

//! Core selection machinery
//!
//! This module contains the zone data model, the provider capability trait,
//! the selector itself, and the concrete provider adapters.

pub mod providers;
pub mod selector;
pub mod traits;
pub mod types;

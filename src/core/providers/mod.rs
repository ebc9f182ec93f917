//! Concrete zone provider adapters
//!
//! Adapters bind the [`ZoneProvider`] capability to a real cloud transport.
//! Each one lives behind its own cargo feature so the core stays
//! dependency-free for callers that bring their own client.
//!
//! [`ZoneProvider`]: crate::core::traits::provider::ZoneProvider

#[cfg(feature = "aws")]
pub mod ec2;

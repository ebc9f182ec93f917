//! Zone provider capability
//!
//! Defines the single seam between the selector and a cloud provider's zone
//! inventory. The selector only consumes this trait; transport, credentials,
//! and retries all live behind the concrete adapter.

use async_trait::async_trait;

use crate::core::types::zone::Zone;

/// Boxed error type carried across the provider seam
///
/// Adapters surface whatever error their transport produces; the selector
/// wraps it without inspecting it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Zone inventory query capability
///
/// Implementations issue exactly one request per call and return every zone
/// the provider reports for the region, in the provider's own order. The
/// selector relies on that order being stable; adapters must not re-sort.
///
/// Implementations must be safe for concurrent use: the selector holds the
/// capability behind an `Arc` and may be called from multiple tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Fetch all availability zones for a region
    ///
    /// # Errors
    /// Returns the transport's error untouched. The selector propagates it
    /// wrapped in its own discovery error; no retry happens at this layer.
    async fn describe_zones(&self, region: &str) -> Result<Vec<Zone>, BoxError>;
}

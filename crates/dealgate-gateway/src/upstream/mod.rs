//! Upstream CRM seam.
//!
//! Handlers talk to [`DealsApi`]; the production implementation is
//! [`PipedriveClient`]. Tests substitute their own implementation or point
//! the real client at a mock server.

pub mod pipedrive;

use async_trait::async_trait;
use serde_json::Value;

use dealgate_core::error::Result;

pub use pipedrive::PipedriveClient;

/// Deal CRUD against the upstream CRM. Each call returns the decoded upstream
/// body on 2xx, `DealGateError::Upstream` on any other status and
/// `DealGateError::Transport` when no usable response arrived.
#[async_trait]
pub trait DealsApi: Send + Sync {
    /// List deals, forwarding the caller's query parameters verbatim.
    async fn list(&self, query: &[(String, String)]) -> Result<Value>;
    /// Create a deal from `body`.
    async fn create(&self, body: &Value) -> Result<Value>;
    /// Update deal `id` with the partial entity in `body`.
    async fn update(&self, id: &str, body: &Value) -> Result<Value>;
}

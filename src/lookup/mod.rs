mod http;

pub use http::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::OrderStatus;

/// Trait for order-status backends
#[async_trait]
pub trait OrderLookup: Send + Sync {
    /// Look up one order by its raw captured id.
    ///
    /// The id is passed through exactly as captured, with no format
    /// validation. Exactly one attempt per call.
    async fn lookup(&self, order_id: &str) -> Result<OrderStatus, LookupError>;
}

/// Failures surfaced by an order lookup.
///
/// Callers collapse every variant into the same user-facing fallback; the
/// distinction exists for operator logs.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport failure or timeout reaching the order API
    #[error("order API unreachable: {0}")]
    Network(#[from] reqwest::Error),
    /// The API answered with an unexpected status
    #[error("order API returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    /// The API answered 2xx but the body had no usable shipment date
    #[error("order API response has no usable shipmentDate field")]
    MalformedResponse,
}

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use super::{LookupError, OrderLookup};
use crate::models::{FoundOrder, OrderStatus};

/// Order-status client backed by a single HTTP POST per lookup.
///
/// No retry, no caching: each call is exactly one network attempt, bounded
/// by the configured timeout.
pub struct HttpOrderLookup {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    order_id: &'a str,
}

impl HttpOrderLookup {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        }
    }

    /// Pull the shipment date out of the response body. The field arrives
    /// as a string from some backends and as a numeric epoch from others.
    fn shipment_date(body: &Value) -> Option<String> {
        match body.get("shipmentDate")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[async_trait]
impl OrderLookup for HttpOrderLookup {
    async fn lookup(&self, order_id: &str) -> Result<OrderStatus, LookupError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&LookupRequest { order_id })
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(OrderStatus::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| LookupError::MalformedResponse)?;

        match Self::shipment_date(&body) {
            Some(shipment_date) => Ok(OrderStatus::Found(FoundOrder {
                order_id: order_id.to_string(),
                shipment_date,
            })),
            None => Err(LookupError::MalformedResponse),
        }
    }
}

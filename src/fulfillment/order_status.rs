use async_trait::async_trait;
use std::sync::Arc;

use super::IntentHandler;
use crate::datefmt;
use crate::lookup::OrderLookup;
use crate::models::{IntentInvocation, OrderStatus, Reply};

/// Intent name this handler is registered under
pub const ORDER_STATUS_INTENT: &str = "getOrderID";

/// Parameter carrying the captured order id
pub const ORDER_ID_PARAM: &str = "number";

/// Reply sent whenever an order can't be resolved, whatever the cause.
/// Lookup failures and genuinely unknown orders read the same to the user.
pub const FALLBACK_REPLY: &str = "No orders against the provided order id is found.";

/// Fulfills the order-status intent: one lookup, one formatted reply.
pub struct OrderStatusHandler {
    lookup: Arc<dyn OrderLookup>,
}

impl OrderStatusHandler {
    pub fn new(lookup: Arc<dyn OrderLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl IntentHandler for OrderStatusHandler {
    async fn handle(&self, invocation: &IntentInvocation) -> Reply {
        let order_id = match invocation.param_str(ORDER_ID_PARAM) {
            Some(id) => id,
            None => {
                tracing::warn!(
                    intent = %invocation.intent_name,
                    "invocation carries no usable order id parameter"
                );
                return Reply::text(FALLBACK_REPLY);
            }
        };

        let order = match self.lookup.lookup(&order_id).await {
            Ok(OrderStatus::Found(order)) => order,
            Ok(OrderStatus::NotFound) => {
                tracing::info!(order_id = %order_id, "no matching order");
                return Reply::text(FALLBACK_REPLY);
            }
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "order lookup failed");
                return Reply::text(FALLBACK_REPLY);
            }
        };

        match datefmt::format_shipment_date(&order.shipment_date) {
            Ok(formatted) => Reply::text(format!(
                "Your order {} will be shipped by {}",
                order.order_id, formatted
            )),
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "unusable shipment date");
                Reply::text(FALLBACK_REPLY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupError;
    use crate::models::FoundOrder;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum StubOutcome {
        Found(&'static str),
        NotFound,
        Upstream,
        Malformed,
    }

    struct StubLookup {
        outcome: StubOutcome,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn new(outcome: StubOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl OrderLookup for StubLookup {
        async fn lookup(&self, order_id: &str) -> Result<OrderStatus, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                StubOutcome::Found(shipment_date) => Ok(OrderStatus::Found(FoundOrder {
                    order_id: order_id.to_string(),
                    shipment_date: shipment_date.to_string(),
                })),
                StubOutcome::NotFound => Ok(OrderStatus::NotFound),
                StubOutcome::Upstream => Err(LookupError::UpstreamStatus(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                )),
                StubOutcome::Malformed => Err(LookupError::MalformedResponse),
            }
        }
    }

    fn invocation(params: serde_json::Value) -> IntentInvocation {
        IntentInvocation::new(ORDER_STATUS_INTENT, params.as_object().cloned().unwrap())
    }

    #[tokio::test]
    async fn test_found_order_reply() {
        let lookup = StubLookup::new(StubOutcome::Found("2023-01-02T15:04:05Z"));
        let handler = OrderStatusHandler::new(lookup.clone());

        let reply = handler.handle(&invocation(json!({ "number": "2313" }))).await;
        assert_eq!(
            reply.text,
            "Your order 2313 will be shipped by Monday, January 2nd 2023, 3:04:05 PM"
        );
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_numeric_parameter_reply() {
        let lookup = StubLookup::new(StubOutcome::Found("2023-01-02T15:04:05Z"));
        let handler = OrderStatusHandler::new(lookup);

        let reply = handler.handle(&invocation(json!({ "number": 2313 }))).await;
        assert_eq!(
            reply.text,
            "Your order 2313 will be shipped by Monday, January 2nd 2023, 3:04:05 PM"
        );
    }

    #[tokio::test]
    async fn test_not_found_falls_back() {
        let lookup = StubLookup::new(StubOutcome::NotFound);
        let handler = OrderStatusHandler::new(lookup);

        let reply = handler.handle(&invocation(json!({ "number": "2313" }))).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back() {
        let lookup = StubLookup::new(StubOutcome::Upstream);
        let handler = OrderStatusHandler::new(lookup);

        let reply = handler.handle(&invocation(json!({ "number": "2313" }))).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_malformed_response_falls_back() {
        let lookup = StubLookup::new(StubOutcome::Malformed);
        let handler = OrderStatusHandler::new(lookup);

        let reply = handler.handle(&invocation(json!({ "number": "2313" }))).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_unparseable_shipment_date_falls_back() {
        let lookup = StubLookup::new(StubOutcome::Found("soon"));
        let handler = OrderStatusHandler::new(lookup);

        let reply = handler.handle(&invocation(json!({ "number": "2313" }))).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_missing_parameter_skips_lookup() {
        let lookup = StubLookup::new(StubOutcome::Found("2023-01-02T15:04:05Z"));
        let handler = OrderStatusHandler::new(lookup.clone());

        let reply = handler.handle(&invocation(json!({}))).await;
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }
}

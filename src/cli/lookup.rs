use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use super::OutputFormat;
use crate::config::Config;
use crate::fulfillment::{IntentHandler, OrderStatusHandler, ORDER_ID_PARAM, ORDER_STATUS_INTENT};
use crate::lookup::HttpOrderLookup;
use crate::models::IntentInvocation;

/// Result of a one-off order lookup
#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub order_id: String,
    pub reply: String,
}

impl std::fmt::Display for LookupReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reply)
    }
}

/// Perform a single lookup against the order API and print the reply the
/// webhook would send for it. Goes through the same handler the server
/// registers, so this doubles as an end-to-end smoke check.
pub async fn run_lookup(order_id: &str, config: &Config, format: OutputFormat) -> Result<()> {
    let client = Arc::new(HttpOrderLookup::new(
        config.order_api_url.clone(),
        config.lookup_timeout,
    ));
    let handler = OrderStatusHandler::new(client);

    let mut parameters = Map::new();
    parameters.insert(
        ORDER_ID_PARAM.to_string(),
        Value::String(order_id.to_string()),
    );
    let invocation = IntentInvocation::new(ORDER_STATUS_INTENT, parameters);

    let reply = handler.handle(&invocation).await;

    format.print(&LookupReport {
        order_id: order_id.to_string(),
        reply: reply.text,
    });
    Ok(())
}

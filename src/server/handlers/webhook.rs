use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use super::ErrorResponse;
use crate::models::IntentInvocation;
use crate::server::AppState;

/// Fulfillment request envelope as sent by the conversational-agent
/// platform. Only the fields the core needs are modeled; everything else
/// in the payload is ignored rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub parameters: Map<String, Value>,
    pub intent: Option<IntentRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    #[serde(default)]
    pub display_name: String,
}

/// Fulfillment response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

impl WebhookRequest {
    /// Adapt the platform envelope down to the invocation the registry
    /// works with. `None` when the payload carries no recognizable intent.
    fn into_invocation(self) -> Option<IntentInvocation> {
        let query_result = self.query_result?;
        let intent = query_result.intent?;
        if intent.display_name.is_empty() {
            return None;
        }
        Some(IntentInvocation::new(
            intent.display_name,
            query_result.parameters,
        ))
    }
}

/// Fulfill one intent invocation.
///
/// Both informative and fallback replies go out as 200; the only non-200
/// path is a payload the platform adapter can't even resolve to a
/// registered intent.
pub async fn fulfill(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WebhookRequest>,
) -> Response {
    let request_id = Uuid::new_v4();

    let invocation = match req.into_invocation() {
        Some(invocation) => invocation,
        None => {
            tracing::warn!(%request_id, "webhook payload carries no intent");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No intent in request")),
            )
                .into_response();
        }
    };

    tracing::info!(%request_id, intent = %invocation.intent_name, "fulfillment request");

    match state.registry.dispatch(&invocation).await {
        Some(reply) => Json(WebhookResponse {
            fulfillment_text: reply.text,
        })
        .into_response(),
        None => {
            tracing::warn!(%request_id, intent = %invocation.intent_name, "unrecognized intent");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "No handler registered for intent: {}",
                    invocation.intent_name
                ))),
            )
                .into_response()
        }
    }
}

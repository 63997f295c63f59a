mod order_status;

pub use order_status::*;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{IntentInvocation, Reply};

/// Trait for intent fulfillment handlers.
///
/// Handlers are infallible by contract: every internal failure must be
/// absorbed into a fallback reply, so each invocation yields exactly one
/// reply and nothing is re-raised to the transport layer.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    async fn handle(&self, invocation: &IntentInvocation) -> Reply;
}

/// Registry mapping intent names to their handlers.
///
/// Populated once at startup. Adding an intent is a new `register` call,
/// never an edit to an existing handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an intent name, replacing any previous one
    pub fn register(&mut self, intent: impl Into<String>, handler: Arc<dyn IntentHandler>) {
        self.handlers.insert(intent.into(), handler);
    }

    /// Dispatch an invocation to its handler, or `None` if the intent name
    /// is not recognized
    pub async fn dispatch(&self, invocation: &IntentInvocation) -> Option<Reply> {
        let handler = self.handlers.get(&invocation.intent_name)?;
        Some(handler.handle(invocation).await)
    }

    /// Names of all registered intents
    pub fn intents(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }
}

mod handlers;
mod routes;

pub use routes::create_router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Config;
use crate::fulfillment::{HandlerRegistry, OrderStatusHandler, ORDER_STATUS_INTENT};
use crate::lookup::HttpOrderLookup;

/// Shared application state
pub struct AppState {
    pub registry: HandlerRegistry,
}

impl AppState {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }
}

/// Run the fulfillment webhook server
pub async fn run_server(config: Config) -> Result<()> {
    let lookup = Arc::new(HttpOrderLookup::new(
        config.order_api_url.clone(),
        config.lookup_timeout,
    ));

    // All in-scope intents are registered here; new intents get their own
    // handler and one more register call.
    let mut registry = HandlerRegistry::new();
    registry.register(ORDER_STATUS_INTENT, Arc::new(OrderStatusHandler::new(lookup)));

    tracing::info!("Registered intents: {:?}", registry.intents());

    let state = Arc::new(AppState::new(registry));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Order API endpoint: {}", config.order_api_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

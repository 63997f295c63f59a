use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

use crate::{DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_PORT};

/// Process-wide settings, resolved once at startup and handed to the
/// server by value. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the webhook server listens on
    pub port: u16,
    /// Endpoint of the order-status API
    pub order_api_url: Url,
    /// Upper bound on each outbound lookup
    pub lookup_timeout: Duration,
}

impl Config {
    pub fn new(port: u16, order_api_url: Url, lookup_timeout: Duration) -> Self {
        Self {
            port,
            order_api_url,
            lookup_timeout,
        }
    }

    /// Resolve configuration from CLI flags, falling back to the
    /// environment (`PORT`, `ORDER_API_URL`). The API URL is required.
    pub fn resolve(
        port: Option<u16>,
        api_url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let port = match port {
            Some(port) => port,
            None => match std::env::var("PORT") {
                Ok(raw) => raw.parse().context("Invalid PORT value")?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let raw_url = match api_url {
            Some(url) => url.to_string(),
            None => match std::env::var("ORDER_API_URL") {
                Ok(url) => url,
                Err(_) => {
                    bail!("No order API endpoint configured. Pass --api-url or set ORDER_API_URL")
                }
            },
        };
        let order_api_url =
            Url::parse(&raw_url).with_context(|| format!("Invalid order API URL: {}", raw_url))?;

        let lookup_timeout =
            Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS));

        Ok(Self::new(port, order_api_url, lookup_timeout))
    }
}

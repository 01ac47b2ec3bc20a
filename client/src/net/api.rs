//! Browser HTTP transport and action runner.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the transport reports itself unavailable
//! and spawned actions are dropped, since there is no browser to talk to.
//!
//! ERROR HANDLING
//! ==============
//! Network failures come back as `TransportError` and are reduced to display
//! strings by the `inventory` actions; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use async_trait::async_trait;
use inventory::transport::{ApiRequest, ApiResponse, Transport};
use inventory::{ApiConfig, Gateway, TransportError};

use crate::state::AppStore;

#[cfg(any(test, feature = "csr"))]
fn authorization_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, not(feature = "csr")))]
const UNAVAILABLE: &str = "not available outside the browser";

/// `fetch`-backed transport pointed at the configured API.
#[derive(Clone, Debug, Default)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use inventory::transport::Method;

            let url = self.config.endpoint(request.path);
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
            }
            .header("Accept", "application/json");
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &authorization_value(token));
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;

            let response = outgoing
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(TransportError::new(UNAVAILABLE))
        }
    }
}

/// Gateway against the API URL baked in at build time.
#[must_use]
pub fn gateway() -> Gateway<BrowserTransport> {
    Gateway::new(BrowserTransport::new(ApiConfig::from_compile_env()))
}

/// Run a workflow action in the background. Its outcome is already written
/// to the store; the returned message is only logged.
pub fn spawn_action<F, Fut>(store: AppStore, action: F)
where
    F: FnOnce(Gateway<BrowserTransport>, AppStore) -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let pending = action(gateway(), store);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(message) = pending.await {
            log::debug!("action failed: {message}");
        }
    });

    #[cfg(not(feature = "csr"))]
    drop(pending);
}

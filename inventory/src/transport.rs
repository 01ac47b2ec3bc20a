//! HTTP transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` implements [`Transport`] with `gloo-net` for the browser and
//! `cli` implements it with `reqwest`. Both only move bytes: status codes and
//! JSON interpretation live in [`crate::gateway`].

use async_trait::async_trait;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request against the API, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path such as `/inventory`.
    pub path: &'static str,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw response: status code plus the undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the response, or a network-level error.
///
/// Futures are `?Send` because browser fetch futures are not thread-safe.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

//! Error types for the gateway and form conversion.
//!
//! ERROR HANDLING
//! ==============
//! These errors stay structured up to the action boundary; `actions` reduces
//! each one to the single display string the views render.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Network-level failure reported by a [`crate::transport::Transport`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// A list endpoint answered with something other than a JSON array.
    #[error("expected a JSON array")]
    NotAnArray,
}

impl ApiError {
    /// Server-provided reason, when the failure carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The server's reason, or `fallback` when there is none.
    #[must_use]
    pub fn display_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

/// Form input that cannot be turned into a request payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

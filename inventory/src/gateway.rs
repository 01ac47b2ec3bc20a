//! Typed calls against the inventory API.
//!
//! Each method issues exactly one request through the wrapped transport. No
//! retries, no timeouts, no pagination.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{
    Ack, AuditLogEntry, ErrorBody, InventoryItem, LoanRequest, LoginRequest, LoginResponse, NewItemRequest,
    ReturnRequest,
};

pub const LOGIN_PATH: &str = "/login";
pub const INVENTORY_PATH: &str = "/inventory";
pub const AUDIT_LOG_PATH: &str = "/audit-log";
pub const LOAN_PATH: &str = "/loan";
pub const RETURN_PATH: &str = "/return";

/// Inventory API client over any [`Transport`].
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; rejected credentials surface as [`ApiError::Status`].
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(request)?;
        let response = self.send(Method::Post, LOGIN_PATH, None, Some(body)).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// `GET /inventory`.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotAnArray`] when the body is valid JSON but not a list.
    pub async fn inventory(&self, bearer: Option<&str>) -> Result<Vec<InventoryItem>, ApiError> {
        self.fetch_list(INVENTORY_PATH, bearer).await
    }

    /// `GET /audit-log`.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotAnArray`] when the body is valid JSON but not a list.
    pub async fn audit_log(&self, bearer: Option<&str>) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.fetch_list(AUDIT_LOG_PATH, bearer).await
    }

    /// `POST /inventory`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn create_item(&self, bearer: Option<&str>, request: &NewItemRequest) -> Result<Ack, ApiError> {
        self.post_ack(INVENTORY_PATH, bearer, request).await
    }

    /// `POST /loan`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; insufficient stock or unknown items come back as
    /// [`ApiError::Status`] with the server's detail.
    pub async fn loan(&self, bearer: Option<&str>, request: &LoanRequest) -> Result<Ack, ApiError> {
        self.post_ack(LOAN_PATH, bearer, request).await
    }

    /// `POST /return`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn return_item(&self, bearer: Option<&str>, request: &ReturnRequest) -> Result<Ack, ApiError> {
        self.post_ack(RETURN_PATH, bearer, request).await
    }

    async fn fetch_list<D: DeserializeOwned>(
        &self,
        path: &'static str,
        bearer: Option<&str>,
    ) -> Result<Vec<D>, ApiError> {
        let response = self.send(Method::Get, path, bearer, None).await?;
        let value: serde_json::Value = serde_json::from_str(&response.body)?;
        if !value.is_array() {
            return Err(ApiError::NotAnArray);
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn post_ack<B: Serialize>(
        &self,
        path: &'static str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<Ack, ApiError> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::Post, path, bearer, Some(body)).await?;
        Ok(parse_ack(&response.body))
    }

    async fn send(
        &self,
        method: Method,
        path: &'static str,
        bearer: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        tracing::debug!(method = method.as_str(), path, authenticated = bearer.is_some(), "api request");
        let request = ApiRequest { method, path, bearer: bearer.map(ToOwned::to_owned), body };
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), path, error = %e, "api request failed");
            ApiError::from(e)
        })?;
        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(ErrorBody::reason);
            tracing::warn!(method = method.as_str(), path, status = response.status, ?detail, "api error status");
            return Err(ApiError::Status { status: response.status, detail });
        }
        Ok(response)
    }
}

/// Mutations only need the optional `message`; bodies that are empty or not
/// an object still count as success since the status already said so.
fn parse_ack(body: &str) -> Ack {
    if body.trim().is_empty() {
        return Ack::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

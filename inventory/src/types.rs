//! Wire DTOs exchanged with the inventory API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON exactly. Descriptive fields added in
//! later API revisions are optional so older servers still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shop locations stock moves between.
pub const KNOWN_LOCATIONS: [&str; 2] = ["Kitchener", "Cambridge"];

/// A stocked item as listed by `GET /inventory`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name, e.g. `"Gloss Label Roll"`.
    pub item: String,
    /// Units on hand.
    pub quantity: i64,
    /// Units earmarked for a job and not available for loan.
    #[serde(default)]
    pub reserved: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_finish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Location the stock is shelved at, when the server tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl InventoryItem {
    /// Units that can still be loaned out.
    #[must_use]
    pub fn available(&self) -> i64 {
        self.quantity.saturating_sub(self.reserved).max(0)
    }
}

/// Kind of stock movement recorded in the audit log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Loan,
    Return,
}

impl AuditAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Loan => "loan",
            Self::Return => "return",
        }
    }
}

/// One row of `GET /audit-log`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Server timestamp, passed through verbatim.
    pub timestamp: String,
    pub action: AuditAction,
    /// Item name at the time of the movement.
    pub item: String,
    pub quantity: i64,
    /// Destination of a loan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Source of a return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl AuditLogEntry {
    /// The other end of the movement: destination for loans, source for returns.
    #[must_use]
    pub fn counterpart_location(&self) -> Option<&str> {
        match self.action {
            AuditAction::Loan => self.to.as_deref(),
            AuditAction::Return => self.from.as_deref(),
        }
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /loan`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub item_id: i64,
    pub quantity: i64,
    pub to_location: String,
}

/// Body of `POST /return`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub item_id: i64,
    pub quantity: i64,
    pub from_location: String,
}

/// Body of `POST /inventory`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemRequest {
    pub item: String,
    pub quantity: i64,
    pub reserved: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_finish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Acknowledgement returned by the mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the server attaches to non-2xx responses.
///
/// `detail` is left as raw JSON because validation failures carry an array
/// there instead of a string.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The human-readable reason, if the server provided one as a string.
    pub(crate) fn reason(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
            _ => self.message.filter(|m| !m.trim().is_empty()),
        }
    }
}

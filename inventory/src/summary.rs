//! Dashboard totals derived from the current views.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::types::{AuditAction, AuditLogEntry, InventoryItem};

/// Headline numbers for the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub item_count: usize,
    pub on_hand: i64,
    pub reserved: i64,
    pub available: i64,
    pub loans: usize,
    pub returns: usize,
    /// Names of items with nothing left to loan.
    pub depleted: Vec<String>,
}

impl InventorySummary {
    #[must_use]
    pub fn compute(items: &[InventoryItem], audit_log: &[AuditLogEntry]) -> Self {
        let mut summary = Self { item_count: items.len(), ..Self::default() };
        for item in items {
            summary.on_hand = summary.on_hand.saturating_add(item.quantity);
            summary.reserved = summary.reserved.saturating_add(item.reserved);
            summary.available = summary.available.saturating_add(item.available());
            if item.available() == 0 {
                summary.depleted.push(item.item.clone());
            }
        }
        for entry in audit_log {
            match entry.action {
                AuditAction::Loan => summary.loans += 1,
                AuditAction::Return => summary.returns += 1,
            }
        }
        summary
    }
}

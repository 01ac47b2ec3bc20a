//! Plain-text tables for terminal output.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use inventory::summary::InventorySummary;
use inventory::types::{AuditLogEntry, InventoryItem};

const EMPTY_CELL: &str = "-";

fn cell(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(EMPTY_CELL).to_owned()
}

/// Left-aligned columns padded to the widest cell, two spaces apart.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(value, width)| format!("{value:<width$}"))
            .collect();
        padded.join("  ").trim_end().to_owned()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.to_vec()));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(line(rule.iter().map(String::as_str).collect()));
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

#[must_use]
pub fn inventory_table(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No items.".to_owned();
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.item.clone(),
                item.quantity.to_string(),
                item.reserved.to_string(),
                item.available().to_string(),
                cell(item.vendor.as_deref()),
                cell(item.location.as_deref()),
            ]
        })
        .collect();
    render_table(&["ID", "ITEM", "ON HAND", "RESERVED", "AVAILABLE", "VENDOR", "LOCATION"], &rows)
}

#[must_use]
pub fn audit_log_table(entries: &[AuditLogEntry]) -> String {
    if entries.is_empty() {
        return "No activity yet.".to_owned();
    }
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                entry.timestamp.clone(),
                entry.action.label().to_owned(),
                entry.item.clone(),
                entry.quantity.to_string(),
                cell(entry.counterpart_location()),
            ]
        })
        .collect();
    render_table(&["TIME", "ACTION", "ITEM", "QTY", "LOCATION"], &rows)
}

#[must_use]
pub fn summary_table(summary: &InventorySummary) -> String {
    let rows = vec![
        vec!["Items".to_owned(), summary.item_count.to_string()],
        vec!["On hand".to_owned(), summary.on_hand.to_string()],
        vec!["Reserved".to_owned(), summary.reserved.to_string()],
        vec!["Available".to_owned(), summary.available.to_string()],
        vec!["Loans".to_owned(), summary.loans.to_string()],
        vec!["Returns".to_owned(), summary.returns.to_string()],
    ];
    let mut out = render_table(&["METRIC", "VALUE"], &rows);
    if !summary.depleted.is_empty() {
        out.push_str("\n\nNothing left to loan: ");
        out.push_str(&summary.depleted.join(", "));
    }
    out
}

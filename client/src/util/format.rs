//! Display formatting for table cells and labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use inventory::forms::FieldKind;
use inventory::types::{AuditAction, AuditLogEntry};

/// DOM id of the `<datalist>` holding the known shop locations.
pub const LOCATIONS_DATALIST_ID: &str = "known-locations";

/// Placeholder for an empty optional cell.
pub const EMPTY_CELL: &str = "—";

pub fn optional_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => EMPTY_CELL.to_owned(),
    }
}

/// Server timestamps are ISO-8601; show them as `YYYY-MM-DD HH:MM:SS`,
/// keeping any UTC offset.
pub fn timestamp_cell(raw: &str) -> String {
    let without_fraction = match raw.split_once('.') {
        Some((whole, rest)) => format!("{whole}{}", rest.trim_start_matches(|c: char| c.is_ascii_digit())),
        None => raw.to_owned(),
    };
    without_fraction.replacen('T', " ", 1)
}

/// "to Cambridge" / "from Kitchener".
pub fn movement_cell(entry: &AuditLogEntry) -> String {
    let direction = match entry.action {
        AuditAction::Loan => "to",
        AuditAction::Return => "from",
    };
    match entry.counterpart_location() {
        Some(location) => format!("{direction} {location}"),
        None => EMPTY_CELL.to_owned(),
    }
}

pub fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text | FieldKind::Location => "text",
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Integer => "number",
    }
}

/// `list` attribute for a field, wiring location inputs to the datalist.
pub fn datalist_for(kind: FieldKind) -> Option<&'static str> {
    matches!(kind, FieldKind::Location).then_some(LOCATIONS_DATALIST_ID)
}

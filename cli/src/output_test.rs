use inventory::types::AuditAction;

use super::*;

#[test]
fn inventory_table_aligns_columns_and_fills_blanks() {
    let items = [
        InventoryItem {
            id: 1,
            item: "Gloss Label Roll".to_owned(),
            quantity: 100,
            reserved: 10,
            vendor: Some("Avery".to_owned()),
            ..Default::default()
        },
        InventoryItem { id: 12, item: "Silk Text".to_owned(), quantity: 3, reserved: 5, ..Default::default() },
    ];
    let table = inventory_table(&items);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID  ITEM"));
    assert!(lines[2].starts_with("1   Gloss Label Roll  100"));
    assert!(lines[3].contains("  0  "), "available floors at zero: {}", lines[3]);
    assert!(lines[3].ends_with('-'));
}

#[test]
fn empty_lists_render_a_message() {
    assert_eq!(inventory_table(&[]), "No items.");
    assert_eq!(audit_log_table(&[]), "No activity yet.");
}

#[test]
fn audit_log_table_shows_counterpart_location() {
    let entries = [
        AuditLogEntry {
            timestamp: "2024-05-01T10:00:00".to_owned(),
            action: AuditAction::Loan,
            item: "Kraft Envelope".to_owned(),
            quantity: 2,
            to: Some("Cambridge".to_owned()),
            from: None,
        },
        AuditLogEntry {
            timestamp: "2024-05-02T09:30:00".to_owned(),
            action: AuditAction::Return,
            item: "Kraft Envelope".to_owned(),
            quantity: 1,
            to: None,
            from: Some("Kitchener".to_owned()),
        },
    ];
    let table = audit_log_table(&entries);
    let lines: Vec<&str> = table.lines().collect();
    assert!(lines[2].contains("loan") && lines[2].ends_with("Cambridge"));
    assert!(lines[3].contains("return") && lines[3].ends_with("Kitchener"));
}

#[test]
fn summary_table_lists_depleted_items() {
    let summary = InventorySummary {
        item_count: 2,
        depleted: vec!["Silk Text".to_owned()],
        ..Default::default()
    };
    let out = summary_table(&summary);
    assert!(out.contains("Items      2"));
    assert!(out.ends_with("Nothing left to loan: Silk Text"));
}

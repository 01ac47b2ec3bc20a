use super::*;

fn item(name: &str, quantity: i64, reserved: i64) -> InventoryItem {
    InventoryItem { item: name.to_owned(), quantity, reserved, ..Default::default() }
}

fn entry(action: AuditAction) -> AuditLogEntry {
    AuditLogEntry {
        timestamp: "2024-05-01T10:00:00".to_owned(),
        action,
        item: "Gloss Label Roll".to_owned(),
        quantity: 1,
        to: None,
        from: None,
    }
}

#[test]
fn empty_views_give_zero_summary() {
    assert_eq!(InventorySummary::compute(&[], &[]), InventorySummary::default());
}

#[test]
fn totals_add_up_across_items() {
    let items = [item("Gloss Label Roll", 100, 10), item("Matte Cover Sheet", 200, 0)];
    let summary = InventorySummary::compute(&items, &[]);
    assert_eq!(summary.item_count, 2);
    assert_eq!(summary.on_hand, 300);
    assert_eq!(summary.reserved, 10);
    assert_eq!(summary.available, 290);
    assert!(summary.depleted.is_empty());
}

#[test]
fn fully_reserved_items_are_depleted() {
    let items = [item("Kraft Envelope", 5, 5), item("Silk Text", 0, 0)];
    let summary = InventorySummary::compute(&items, &[]);
    assert_eq!(summary.depleted, vec!["Kraft Envelope".to_owned(), "Silk Text".to_owned()]);
}

#[test]
fn audit_entries_are_counted_by_action() {
    let log = [entry(AuditAction::Loan), entry(AuditAction::Loan), entry(AuditAction::Return)];
    let summary = InventorySummary::compute(&[], &log);
    assert_eq!(summary.loans, 2);
    assert_eq!(summary.returns, 1);
}

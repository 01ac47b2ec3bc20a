use super::*;

#[test]
fn inventory_item_accepts_minimal_server_shape() {
    let item: InventoryItem = serde_json::from_value(serde_json::json!({
        "id": 1,
        "item": "Gloss Label Roll",
        "quantity": 100,
        "reserved": 10
    }))
    .expect("item");
    assert_eq!(item.id, 1);
    assert_eq!(item.item, "Gloss Label Roll");
    assert_eq!(item.vendor, None);
    assert_eq!(item.location, None);
}

#[test]
fn inventory_item_reads_extended_fields() {
    let item: InventoryItem = serde_json::from_value(serde_json::json!({
        "id": 7,
        "item": "Silk Text",
        "quantity": 40,
        "reserved": 0,
        "vendor": "Domtar",
        "paper_finish": "silk",
        "size": "12x18",
        "location": "Cambridge"
    }))
    .expect("item");
    assert_eq!(item.vendor.as_deref(), Some("Domtar"));
    assert_eq!(item.paper_finish.as_deref(), Some("silk"));
    assert_eq!(item.size.as_deref(), Some("12x18"));
    assert_eq!(item.location.as_deref(), Some("Cambridge"));
}

#[test]
fn inventory_item_serialization_omits_absent_extended_fields() {
    let item = InventoryItem { id: 2, item: "Matte Cover".to_owned(), quantity: 5, ..Default::default() };
    let value = serde_json::to_value(&item).expect("json");
    assert!(value.get("vendor").is_none());
    assert_eq!(value["reserved"], 0);
}

#[test]
fn available_subtracts_reserved_and_never_goes_negative() {
    let mut item = InventoryItem { quantity: 100, reserved: 10, ..Default::default() };
    assert_eq!(item.available(), 90);
    item.reserved = 150;
    assert_eq!(item.available(), 0);
}

#[test]
fn audit_entry_counterpart_follows_action() {
    let loan: AuditLogEntry = serde_json::from_value(serde_json::json!({
        "action": "loan",
        "item": "Gloss Label Roll",
        "quantity": 5,
        "to": "Cambridge",
        "timestamp": "2024-05-01T10:00:00"
    }))
    .expect("loan");
    assert_eq!(loan.action, AuditAction::Loan);
    assert_eq!(loan.counterpart_location(), Some("Cambridge"));

    let ret: AuditLogEntry = serde_json::from_value(serde_json::json!({
        "action": "return",
        "item": "Gloss Label Roll",
        "quantity": 5,
        "from": "Kitchener",
        "timestamp": "2024-05-01T11:00:00"
    }))
    .expect("return");
    assert_eq!(ret.counterpart_location(), Some("Kitchener"));
    assert_eq!(ret.action.label(), "return");
}

#[test]
fn audit_action_rejects_unknown_kind() {
    let parsed = serde_json::from_value::<AuditAction>(serde_json::json!("transfer"));
    assert!(parsed.is_err());
}

#[test]
fn login_response_accepts_access_token_alias() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "abc",
        "location": "Kitchener"
    }))
    .expect("login");
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.location.as_deref(), Some("Kitchener"));
    assert_eq!(resp.email, None);
}

#[test]
fn error_body_prefers_string_detail() {
    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({ "detail": "Not enough stock", "message": "ignored" })).expect("body");
    assert_eq!(body.reason().as_deref(), Some("Not enough stock"));
}

#[test]
fn error_body_ignores_validation_arrays() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({
        "detail": [{ "loc": ["body", "quantity"], "msg": "field required" }]
    }))
    .expect("body");
    assert_eq!(body.reason(), None);
}

#[test]
fn error_body_falls_back_to_message() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({ "message": "Invalid credentials" })).expect("body");
    assert_eq!(body.reason().as_deref(), Some("Invalid credentials"));
}

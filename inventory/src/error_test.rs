use super::*;

#[test]
fn status_error_exposes_detail() {
    let err = ApiError::Status { status: 400, detail: Some("Not enough stock".to_owned()) };
    assert_eq!(err.detail(), Some("Not enough stock"));
    assert_eq!(err.display_or("Loan failed"), "Not enough stock");
}

#[test]
fn transport_and_shape_errors_use_fallback() {
    let err = ApiError::from(TransportError::new("connection refused"));
    assert_eq!(err.detail(), None);
    assert_eq!(err.display_or("Loan failed"), "Loan failed");
    assert_eq!(ApiError::NotAnArray.display_or("Failed to load inventory"), "Failed to load inventory");
}

#[test]
fn status_without_detail_uses_fallback() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(err.to_string(), "server returned 500");
    assert_eq!(err.display_or("Return failed"), "Return failed");
}

#[test]
fn form_error_messages_name_the_field() {
    assert_eq!(FormError::Missing("Item ID").to_string(), "Item ID is required");
    assert_eq!(FormError::NotANumber("Quantity").to_string(), "Quantity must be a whole number");
}

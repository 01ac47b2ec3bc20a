use super::*;

// =============================================================
// Field mapping
// =============================================================

#[test]
fn every_declared_field_is_addressable() {
    fn check<F: Form>() {
        let mut form = F::default();
        for spec in F::FIELDS {
            assert!(form.set_field(spec.name, "x"), "{} should be settable", spec.name);
            assert_eq!(form.field(spec.name), Some("x"));
        }
    }
    check::<LoginForm>();
    check::<LoanForm>();
    check::<ReturnForm>();
    check::<NewItemForm>();
}

#[test]
fn unknown_field_is_rejected() {
    let mut form = LoanForm::default();
    assert!(!form.set_field("colour", "red"));
    assert_eq!(form.field("colour"), None);
    assert_eq!(form, LoanForm::default());
}

#[test]
fn reset_returns_to_blank_defaults() {
    let mut form = ReturnForm {
        item_id: "1".to_owned(),
        quantity: "2".to_owned(),
        from_location: "Cambridge".to_owned(),
    };
    assert!(!form.is_blank());
    form.reset();
    assert_eq!(form, ReturnForm::default());
    assert!(form.is_blank());
}

// =============================================================
// Conversion
// =============================================================

#[test]
fn loan_form_converts_numeric_fields() {
    let form = LoanForm { item_id: " 3 ".to_owned(), quantity: "12".to_owned(), to_location: " Cambridge ".to_owned() };
    assert_eq!(
        form.to_request(),
        Ok(LoanRequest { item_id: 3, quantity: 12, to_location: "Cambridge".to_owned() })
    );
}

#[test]
fn loan_form_rejects_non_numeric_quantity() {
    let form = LoanForm { item_id: "3".to_owned(), quantity: "a dozen".to_owned(), to_location: "Cambridge".to_owned() };
    assert_eq!(form.to_request(), Err(FormError::NotANumber("Quantity")));
}

#[test]
fn return_form_requires_location() {
    let form = ReturnForm { item_id: "1".to_owned(), quantity: "1".to_owned(), from_location: "  ".to_owned() };
    assert_eq!(form.to_request(), Err(FormError::Missing("From location")));
}

#[test]
fn login_form_requires_both_fields_and_keeps_password_verbatim() {
    let blank = LoginForm { email: String::new(), password: "pw".to_owned() };
    assert_eq!(blank.to_request(), Err(FormError::Missing("Email")));

    let no_password = LoginForm { email: "pat@shop.test".to_owned(), password: String::new() };
    assert_eq!(no_password.to_request(), Err(FormError::Missing("Password")));

    let ok = LoginForm { email: " pat@shop.test ".to_owned(), password: " pw ".to_owned() };
    assert_eq!(
        ok.to_request(),
        Ok(LoginRequest { email: "pat@shop.test".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn new_item_form_defaults_reserved_and_drops_blank_extras() {
    let mut form = NewItemForm::default();
    form.set_field("item", "Kraft Envelope");
    form.set_field("quantity", "50");
    form.set_field("vendor", "Veritiv");
    form.set_field("size", "   ");

    let req = form.to_request().expect("request");
    assert_eq!(req.item, "Kraft Envelope");
    assert_eq!(req.quantity, 50);
    assert_eq!(req.reserved, 0);
    assert_eq!(req.vendor.as_deref(), Some("Veritiv"));
    assert_eq!(req.size, None);
}

#[test]
fn new_item_form_rejects_bad_reserved() {
    let form = NewItemForm {
        item: "Kraft Envelope".to_owned(),
        quantity: "50".to_owned(),
        reserved: "some".to_owned(),
        ..Default::default()
    };
    assert_eq!(form.to_request(), Err(FormError::NotANumber("Reserved")));
}

#[test]
fn only_new_item_extras_are_optional() {
    assert!(LoanForm::FIELDS.iter().all(|f| f.required));
    assert!(ReturnForm::FIELDS.iter().all(|f| f.required));
    let optional: Vec<_> = NewItemForm::FIELDS.iter().filter(|f| !f.required).map(|f| f.name).collect();
    assert!(!optional.contains(&"item"));
    assert!(!optional.contains(&"quantity"));
    assert!(optional.contains(&"reserved"));
}

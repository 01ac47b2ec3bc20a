use super::*;

#[test]
fn store_updates_are_visible_to_reads() {
    let owner = Owner::new();
    owner.with(|| {
        let store = AppStore::new();
        store.update(|s| s.notice = Some("Item loaned".to_owned()));
        assert_eq!(store.read(|s| s.notice.clone()).as_deref(), Some("Item loaned"));
        assert_eq!(store.with(|s| s.notice.clone()).as_deref(), Some("Item loaned"));
    });
}

#[test]
fn copies_share_one_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let store = AppStore::new();
        let copy = store;
        inventory::actions::logout(&copy);
        copy.update(|s| s.loan.fields.quantity = "2".to_owned());
        assert_eq!(store.snapshot().loan.fields.quantity, "2");
    });
}

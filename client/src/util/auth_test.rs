use super::*;
use inventory::state::Session;

fn signed_in() -> AppState {
    AppState {
        session: Some(Session {
            email: "pat@shop.test".to_owned(),
            token: "tok".to_owned(),
            location: Some("Kitchener".to_owned()),
        }),
        ..AppState::default()
    }
}

#[test]
fn should_redirect_unauth_when_session_missing() {
    assert!(should_redirect_unauth(&AppState::default()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}

#[test]
fn login_page_is_left_only_once_signed_in() {
    assert!(!should_leave_login(&AppState::default()));
    assert!(should_leave_login(&signed_in()));
}

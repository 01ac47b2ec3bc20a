//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every section page applies the same unauthenticated redirect, and the
//! login page applies the reverse once a session appears.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use inventory::state::AppState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::AppStore;

fn should_redirect_unauth(state: &AppState) -> bool {
    !state.is_authenticated()
}

fn should_leave_login(state: &AppState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/login` whenever no session is present.
pub fn install_unauth_redirect<F>(store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect from the login page to the dashboard once signed in.
pub fn install_authed_redirect<F>(store: AppStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.with(should_leave_login) {
            navigate("/", NavigateOptions::default());
        }
    });
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (redirects, initial loads) and
//! delegates rendering details to `components`.

pub mod audit_log;
pub mod dashboard;
pub mod inventory;
pub mod login;
pub mod transfers;

use ::inventory::actions;
use ::inventory::state::AppState;
use leptos::prelude::*;

use crate::net::api::spawn_action;
use crate::state::AppStore;

/// Fetch both views once when a signed-in page mounts with nothing loaded or
/// in flight. A login already in progress owns the first load.
pub(crate) fn load_on_mount(store: AppStore) {
    Effect::new(move || {
        if store.with(AppState::needs_initial_load) {
            spawn_action(store, |gw, store| async move { actions::refresh_all(&gw, &store).await });
        }
    });
}

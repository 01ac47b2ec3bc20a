//! Audit log page: every recorded loan and return.

use inventory::actions;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::audit_log_table::AuditLogTable;
use crate::net::api::spawn_action;
use crate::pages::load_on_mount;
use crate::state::AppStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_unauth_redirect(store, use_navigate());
    load_on_mount(store);

    let on_refresh = move |_| {
        spawn_action(store, |gw, store| async move { actions::refresh_audit_log(&gw, &store).await });
    };

    view! {
        <div class="page audit-log-page">
            <div class="page__header">
                <h2>"Audit Log"</h2>
                <button class="btn" on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            <AuditLogTable/>
        </div>
    }
}

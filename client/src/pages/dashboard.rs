//! Dashboard page: headline totals and the most recent stock movements.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Totals are derived on the fly
//! from whatever the inventory and audit-log views currently hold.

use inventory::actions;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::audit_log_table::AuditLogTable;
use crate::components::summary_cards::SummaryCards;
use crate::net::api::spawn_action;
use crate::pages::load_on_mount;
use crate::state::AppStore;
use crate::util::auth::install_unauth_redirect;

const RECENT_ACTIVITY: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_unauth_redirect(store, use_navigate());
    load_on_mount(store);

    let on_refresh = move |_| {
        spawn_action(store, |gw, store| async move { actions::refresh_all(&gw, &store).await });
    };

    view! {
        <div class="page dashboard-page">
            <div class="page__header">
                <h2>"Dashboard"</h2>
                <button class="btn" on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            <SummaryCards/>
            <h3>"Recent activity"</h3>
            <AuditLogTable limit=RECENT_ACTIVITY/>
        </div>
    }
}

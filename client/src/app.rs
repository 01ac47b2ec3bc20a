//! Root application component with routing and the shared store.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::AppHeader;
use crate::components::notice::Notice;
use crate::pages::{
    audit_log::AuditLogPage, dashboard::DashboardPage, inventory::InventoryPage, login::LoginPage,
    transfers::TransfersPage,
};
use crate::state::AppStore;
use crate::util::format::LOCATIONS_DATALIST_ID;

/// Root application component.
///
/// Provides the store context and sets up client-side routing. The session
/// is held only in memory, so a reload always lands on the login page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppStore::new();
    provide_context(store);

    view! {
        <Title text="Inventory Management System"/>

        <Router>
            <div class="app">
                <AppHeader/>
                <Notice/>
                <main class="main-content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("inventory") view=InventoryPage/>
                        <Route path=StaticSegment("transfers") view=TransfersPage/>
                        <Route path=StaticSegment("audit-log") view=AuditLogPage/>
                    </Routes>
                </main>
                <datalist id=LOCATIONS_DATALIST_ID>
                    {inventory::types::KNOWN_LOCATIONS
                        .iter()
                        .map(|location| view! { <option value=*location></option> })
                        .collect_view()}
                </datalist>
            </div>
        </Router>
    }
}

//! Shop header, section navigation and session badge.

use inventory::actions;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::AppStore;

/// Navigation targets, in display order.
const SECTIONS: [(&str, &str); 4] = [
    ("/", "Dashboard"),
    ("/inventory", "Inventory"),
    ("/transfers", "Loan/Return"),
    ("/audit-log", "Audit Log"),
];

#[component]
pub fn AppHeader() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let signed_in = move || store.with(|s| s.is_authenticated());

    view! {
        <header class="app-header">
            <div class="app-header__title">
                <h1>"Minuteman Press Kitchener / Cambridge"</h1>
                <p>"Inventory Management System"</p>
            </div>
            <Show when=signed_in>
                <SessionBadge/>
            </Show>
        </header>
        <Show when=signed_in>
            <nav class="navbar">
                {SECTIONS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href>{*label}</A> })
                    .collect_view()}
            </nav>
        </Show>
    }
}

/// Signed-in email, assigned location, and logout.
#[component]
fn SessionBadge() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let email = move || store.with(|s| s.session.as_ref().map(|x| x.email.clone()).unwrap_or_default());
    let location = move || store.with(|s| s.session.as_ref().and_then(|x| x.location.clone()));

    view! {
        <div class="session-badge">
            <span class="session-badge__email">{email}</span>
            {move || location().map(|loc| view! { <span class="session-badge__location">{loc}</span> })}
            <button class="btn session-badge__logout" on:click=move |_| actions::logout(&store)>
                "Log out"
            </button>
        </div>
    }
}

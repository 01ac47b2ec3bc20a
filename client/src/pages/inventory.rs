//! Inventory page: full stock table plus the add-item form.

use inventory::actions;
use inventory::forms::NewItemForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_panel::{FormPanel, form_error, form_fields};
use crate::components::inventory_table::InventoryTable;
use crate::net::api::spawn_action;
use crate::pages::load_on_mount;
use crate::state::AppStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_unauth_redirect(store, use_navigate());
    load_on_mount(store);

    let on_refresh = move |_| {
        spawn_action(store, |gw, store| async move { actions::refresh_inventory(&gw, &store).await });
    };
    let on_add = Callback::new(move |()| {
        spawn_action(store, |gw, store| async move { actions::submit_new_item(&gw, &store).await });
    });

    view! {
        <div class="page inventory-page">
            <div class="page__header">
                <h2>"Inventory"</h2>
                <button class="btn" on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            <InventoryTable/>
            <FormPanel
                title="Add item"
                submit_label="Add item"
                error={form_error::<NewItemForm>(store)}
                on_submit=on_add
            >
                {form_fields::<NewItemForm>(store)}
            </FormPanel>
        </div>
    }
}

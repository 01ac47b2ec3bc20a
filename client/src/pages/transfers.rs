//! Loan/Return page: move stock between the two shops.

use inventory::actions;
use inventory::forms::{LoanForm, ReturnForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_panel::{FormPanel, form_error, form_fields};
use crate::components::inventory_table::InventoryTable;
use crate::net::api::spawn_action;
use crate::pages::load_on_mount;
use crate::state::AppStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn TransfersPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_unauth_redirect(store, use_navigate());
    load_on_mount(store);

    let on_loan = Callback::new(move |()| {
        spawn_action(store, |gw, store| async move { actions::submit_loan(&gw, &store).await });
    });
    let on_return = Callback::new(move |()| {
        spawn_action(store, |gw, store| async move { actions::submit_return(&gw, &store).await });
    });

    view! {
        <div class="page transfers-page">
            <h2>"Loan / Return"</h2>
            <div class="transfers-page__forms">
                <FormPanel
                    title="Loan stock"
                    submit_label="Loan"
                    error={form_error::<LoanForm>(store)}
                    on_submit=on_loan
                >
                    {form_fields::<LoanForm>(store)}
                </FormPanel>
                <FormPanel
                    title="Return stock"
                    submit_label="Return"
                    error={form_error::<ReturnForm>(store)}
                    on_submit=on_return
                >
                    {form_fields::<ReturnForm>(store)}
                </FormPanel>
            </div>
            <InventoryTable/>
        </div>
    }
}

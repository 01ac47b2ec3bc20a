//! Login page: email + password against `/login`.

use inventory::actions;
use inventory::forms::LoginForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_panel::{FormPanel, form_error, form_fields};
use crate::net::api::spawn_action;
use crate::state::AppStore;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    install_authed_redirect(store, use_navigate());

    let on_submit = Callback::new(move |()| {
        spawn_action(store, |gw, store| async move { actions::submit_login(&gw, &store).await });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <FormPanel
                    title="Sign in"
                    submit_label="Log in"
                    error={form_error::<LoginForm>(store)}
                    on_submit=on_submit
                >
                    {form_fields::<LoginForm>(store)}
                </FormPanel>
            </div>
        </div>
    }
}

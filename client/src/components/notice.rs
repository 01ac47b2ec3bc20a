//! Banner for the last mutation's confirmation message.

use inventory::state::Store;
use leptos::prelude::*;

use crate::state::AppStore;

#[component]
pub fn Notice() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let notice = move || store.with(|s| s.notice.clone());

    view! {
        {move || {
            notice()
                .map(|message| {
                    view! {
                        <div class="notice" role="status">
                            <span>{message}</span>
                            <button
                                class="notice__dismiss"
                                title="Dismiss"
                                on:click=move |_| store.update(|s| s.notice = None)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

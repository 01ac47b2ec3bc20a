//! Dashboard headline numbers.

use inventory::summary::InventorySummary;
use leptos::prelude::*;

use crate::state::AppStore;

#[component]
pub fn SummaryCards() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let summary = Memo::new(move |_| {
        store.with(|s| InventorySummary::compute(&s.inventory.items, &s.audit_log.items))
    });

    let card = move |label: &'static str, value: fn(&InventorySummary) -> String| {
        view! {
            <div class="summary-card">
                <span class="summary-card__value">{move || summary.with(value)}</span>
                <span class="summary-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="summary-cards">
            {card("Items", |s| s.item_count.to_string())}
            {card("On hand", |s| s.on_hand.to_string())}
            {card("Reserved", |s| s.reserved.to_string())}
            {card("Available", |s| s.available.to_string())}
            {card("Loans", |s| s.loans.to_string())}
            {card("Returns", |s| s.returns.to_string())}
        </div>
        <Show when=move || summary.with(|s| !s.depleted.is_empty())>
            <p class="summary-depleted">
                "Nothing left to loan: "
                {move || summary.with(|s| s.depleted.join(", "))}
            </p>
        </Show>
    }
}

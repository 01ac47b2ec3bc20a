//! Inventory table bound to the last-fetched list.

use leptos::prelude::*;

use crate::state::AppStore;
use crate::util::format::optional_cell;

#[component]
pub fn InventoryTable() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let items = move || store.with(|s| s.inventory.items.clone());
    let error = move || store.with(|s| s.inventory.error.clone());

    view! {
        <div class="inventory-table">
            {move || error().map(|message| view! { <p class="table-error">{message}</p> })}
            <Show
                when=move || !items().is_empty()
                fallback=move || view! { <p class="table-empty">"No items."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Item"</th>
                            <th>"On hand"</th>
                            <th>"Reserved"</th>
                            <th>"Available"</th>
                            <th>"SKU"</th>
                            <th>"Vendor"</th>
                            <th>"Finish"</th>
                            <th>"Weight"</th>
                            <th>"Size"</th>
                            <th>"Color"</th>
                            <th>"Location"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items()
                                .into_iter()
                                .map(|item| {
                                    let available = item.available();
                                    view! {
                                        <tr class=("data-table__row--depleted", available == 0)>
                                            <td class="data-table__num">{item.id}</td>
                                            <td>{item.item}</td>
                                            <td class="data-table__num">{item.quantity}</td>
                                            <td class="data-table__num">{item.reserved}</td>
                                            <td class="data-table__num">{available}</td>
                                            <td>{optional_cell(item.sku.as_deref())}</td>
                                            <td>{optional_cell(item.vendor.as_deref())}</td>
                                            <td>{optional_cell(item.paper_finish.as_deref())}</td>
                                            <td>{optional_cell(item.paper_weight.as_deref())}</td>
                                            <td>{optional_cell(item.size.as_deref())}</td>
                                            <td>{optional_cell(item.color.as_deref())}</td>
                                            <td>{optional_cell(item.location.as_deref())}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

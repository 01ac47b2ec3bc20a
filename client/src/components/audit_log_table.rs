//! Audit log table, newest entries first.

use inventory::types::AuditLogEntry;
use leptos::prelude::*;

use crate::state::AppStore;
use crate::util::format::{movement_cell, timestamp_cell};

#[component]
pub fn AuditLogTable(
    /// Show at most this many rows.
    #[prop(optional)]
    limit: Option<usize>,
) -> impl IntoView {
    let store = expect_context::<AppStore>();
    let entries = move || {
        store.with(|s| {
            s.audit_log
                .items
                .iter()
                .rev()
                .take(limit.unwrap_or(usize::MAX))
                .cloned()
                .collect::<Vec<AuditLogEntry>>()
        })
    };
    let error = move || store.with(|s| s.audit_log.error.clone());

    view! {
        <div class="audit-log">
            {move || error().map(|message| view! { <p class="table-error">{message}</p> })}
            <Show
                when=move || !entries().is_empty()
                fallback=move || view! { <p class="table-empty">"No activity yet."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"Action"</th>
                            <th>"Item"</th>
                            <th>"Qty"</th>
                            <th>"Location"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            entries()
                                .into_iter()
                                .map(|entry| {
                                    let movement = movement_cell(&entry);
                                    view! {
                                        <tr>
                                            <td class="data-table__mono">{timestamp_cell(&entry.timestamp)}</td>
                                            <td>
                                                <span class=format!("badge badge--{}", entry.action.label())>
                                                    {entry.action.label()}
                                                </span>
                                            </td>
                                            <td>{entry.item}</td>
                                            <td class="data-table__num">{entry.quantity}</td>
                                            <td>{movement}</td>
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

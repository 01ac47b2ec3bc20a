//! Form chrome plus generic field binding.
//!
//! DESIGN
//! ======
//! Inputs are generated from `Form::FIELDS`, so adding a field to a form in
//! the `inventory` crate is enough to render and bind it here.

use inventory::forms::Form;
use inventory::state::{AppForm, Store};
use leptos::prelude::*;

use crate::state::AppStore;
use crate::util::format::{datalist_for, input_type};

/// Titled `<form>` that shows the slot's error and calls `on_submit`.
#[component]
pub fn FormPanel(
    title: &'static str,
    submit_label: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="form-panel">
            <h2>{title}</h2>
            <form
                class="form-panel__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                {children()}
                <button class="btn btn--primary" type="submit">
                    {submit_label}
                </button>
            </form>
            {move || error.get().map(|message| view! { <p class="form-panel__error">{message}</p> })}
        </section>
    }
}

/// One bound `<input>` per declared field of `F`.
pub fn form_fields<F: AppForm + 'static>(store: AppStore) -> impl IntoView {
    F::FIELDS
        .iter()
        .map(|spec| {
            let name = spec.name;
            let value = move || store.with(|s| F::slot(s).fields.field(name).unwrap_or_default().to_owned());
            view! {
                <label class="form-field">
                    <span class="form-field__label">{spec.label}</span>
                    <input
                        class="form-field__input"
                        name=name
                        type=input_type(spec.kind)
                        required=spec.required
                        list=datalist_for(spec.kind)
                        prop:value=value
                        on:input=move |ev| {
                            let input = event_target_value(&ev);
                            store.update(|s| {
                                F::slot_mut(s).fields.set_field(name, input);
                            });
                        }
                    />
                </label>
            }
        })
        .collect_view()
}

/// Reactive view of a form slot's error, for [`FormPanel`].
pub fn form_error<F: AppForm + 'static>(store: AppStore) -> Signal<Option<String>> {
    Signal::derive(move || store.with(|s| F::slot(s).error.clone()))
}


//! Text input with an inline validation message.

use leptos::prelude::*;

/// A single form input bound to a value signal, with its error shown beneath.
#[component]
pub fn FieldInput(
    name: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(optional)] data_cy: Option<&'static str>,
    disabled: Signal<bool>,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let has_error = move || error.with(Option::is_some);

    view! {
        <div class="field-input" class:field-input--error=has_error>
            <input
                class="field-input__control"
                name=name
                type=input_type
                placeholder=placeholder
                maxlength=maxlength.map(|n| n.to_string())
                data-cy=data_cy
                aria-invalid=move || if has_error() { "true" } else { "false" }
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=has_error>
                <span class="field-input__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

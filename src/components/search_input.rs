//! Controlled search input shared by the list views.

use leptos::prelude::*;

/// Text input bound to a reactive value; emits the raw input string.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    placeholder: &'static str,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

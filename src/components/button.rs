//! Shared button chrome.

use leptos::prelude::*;

/// A dashboard button. Without `on_press` it renders as decoration only.
#[component]
pub fn UiButton(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() { "btn".to_owned() } else { format!("btn {class}") };
    view! {
        <button
            class=class
            on:click=move |_| {
                if let Some(on_press) = on_press.as_ref() {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

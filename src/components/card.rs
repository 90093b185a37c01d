//! Anchor card chrome for clickable list rows.

use leptos::prelude::*;

/// A clickable card navigating to a detail route.
#[component]
pub fn Card(href: String, children: Children) -> impl IntoView {
    view! {
        <a class="card" href=href>
            <div class="card__content">{children()}</div>
        </a>
    }
}

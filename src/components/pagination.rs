//! Numbered page bar shared by the list views.

use leptos::prelude::*;

/// Page links `1..=total_pages` with the current page highlighted.
///
/// Only offers in-range pages; clamping of programmatic page changes happens
/// in the pipeline, not here.
#[component]
pub fn PageBar(total_pages: usize, current_page: usize, on_select: Callback<usize>) -> impl IntoView {
    view! {
        <nav class="page-bar">
            {(1..=total_pages)
                .map(|page| {
                    let active = page == current_page;
                    view! {
                        <button
                            class="page-bar__link"
                            class:page-bar__link--active=active
                            on:click=move |_| on_select.run(page)
                        >
                            {page.to_string()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

//! Proposals list page.
//!
//! Same pipeline as the bookings page over the proposals collection, which
//! arrives as a bare array instead of an envelope. Proposal cards carry the
//! client-type and industry tags; there is no create action here.

use leptos::prelude::*;

use crate::components::pagination::PageBar;
use crate::components::proposal_card::ProposalCard;
use crate::components::search_input::SearchInput;
use crate::state::list_view::{ListViewState, PER_PAGE};
use crate::util::entry_animation::EntryAnimation;
use crate::util::list_pipeline;

/// Proposals page: searchable, paginated list of proposals, newest first.
#[component]
pub fn ProposalsPage() -> impl IntoView {
    let list = RwSignal::new(ListViewState::default());
    let animation = RwSignal::new(EntryAnimation::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_proposals().await {
                Ok(mut items) => {
                    list_pipeline::sort_newest_first(&mut items);
                    list.update(|s| {
                        s.items = items;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    log::error!("proposals fetch failed: {e}");
                    list.update(|s| s.loading = false);
                }
            }
        });
    }

    let page_items = Memo::new(move |_| {
        let state = list.get();
        let filtered = list_pipeline::filter_items(&state.items, &state.search);
        list_pipeline::page_slice(&filtered, state.current_page, PER_PAGE)
    });
    let total_pages = Memo::new(move |_| {
        let state = list.get();
        let matching = list_pipeline::filter_items(&state.items, &state.search).len();
        list_pipeline::total_pages(matching, PER_PAGE)
    });

    Effect::new(move || {
        page_items.track();
        let token = animation.try_update(|a| a.schedule()).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                crate::util::entry_animation::ENTRY_DELAY_MS,
            ))
            .await;
            let _ = animation.try_update(|a| a.fire(token));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_search = Callback::new(move |term: String| {
        list.update(|s| s.search = term);
    });
    let on_select_page = Callback::new(move |page: usize| {
        let total = total_pages.get_untracked();
        list.update(|s| s.current_page = list_pipeline::clamp_page(page, total));
    });
    let search_value = Signal::derive(move || list.get().search);

    view! {
        <div class="list-page list-page--proposals">
            <header class="list-page__header">
                <h2 class="list-page__title">"Proposals"</h2>
            </header>

            <div class="list-page__search">
                <SearchInput value=search_value placeholder="Search Proposals" on_input=on_search/>
            </div>

            <Show
                when=move || !list.get().loading
                fallback=move || view! { <p class="list-page__loading">"Loading proposals..."</p> }
            >
                <div class="list-grid" class:list-grid--entered=move || animation.get().is_animated()>
                    {move || {
                        page_items
                            .get()
                            .into_iter()
                            .map(|item| view! { <ProposalCard item=item/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="list-page__pager">
                {move || {
                    let total = total_pages.get();
                    let current = list.get().current_page;
                    view! { <PageBar total_pages=total current_page=current on_select=on_select_page/> }
                }}
            </div>
        </div>
    }
}

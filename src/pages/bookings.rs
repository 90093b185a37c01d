//! Bookings list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the bookings collection once on activation, then derives the
//! rendered cards from search + page state through the pure list pipeline.
//! Row click opens the pipeline detail route; the create action navigates to
//! the booking creation route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::booking_card::BookingCard;
use crate::components::button::UiButton;
use crate::components::pagination::PageBar;
use crate::components::search_input::SearchInput;
use crate::state::list_view::{ListViewState, PER_PAGE};
use crate::util::entry_animation::EntryAnimation;
use crate::util::list_pipeline;

/// Bookings page: searchable, paginated list of bookings, newest first.
#[component]
pub fn BookingsPage() -> impl IntoView {
    let list = RwSignal::new(ListViewState::default());
    let animation = RwSignal::new(EntryAnimation::default());
    let navigate = use_navigate();

    // One fetch per view activation. Failures are logged and swallowed; the
    // view keeps an empty collection and a single pager page.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bookings().await {
                Ok(mut items) => {
                    list_pipeline::sort_newest_first(&mut items);
                    list.update(|s| {
                        s.items = items;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    log::error!("bookings fetch failed: {e}");
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

    // Restart the entry animation whenever the rendered slice changes. Stale
    // timers are rejected by their epoch token, and `try_update` makes a
    // timer outliving the page a no-op.
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

    // A new search term does not reset the page; see state::list_view.
    let on_search = Callback::new(move |term: String| {
        list.update(|s| s.search = term);
    });
    let on_select_page = Callback::new(move |page: usize| {
        let total = total_pages.get_untracked();
        list.update(|s| s.current_page = list_pipeline::clamp_page(page, total));
    });
    let on_create = Callback::new(move |()| {
        navigate("/create-booking", NavigateOptions::default());
    });
    let search_value = Signal::derive(move || list.get().search);

    view! {
        <div class="list-page list-page--bookings">
            <header class="list-page__header">
                <h1 class="list-page__title">"Bookings"</h1>
            </header>

            <div class="list-page__search">
                <SearchInput value=search_value placeholder="Search Bookings" on_input=on_search/>
            </div>

            <div class="list-page__actions">
                <UiButton class="list-page__filter">"Filter"</UiButton>
                <UiButton class="list-page__create" on_press=on_create>
                    "+ Create Order"
                </UiButton>
            </div>

            <Show
                when=move || !list.get().loading
                fallback=move || view! { <p class="list-page__loading">"Loading bookings..."</p> }
            >
                <div class="list-grid" class:list-grid--entered=move || animation.get().is_animated()>
                    {move || {
                        page_items
                            .get()
                            .into_iter()
                            .map(|item| view! { <BookingCard item=item/> })
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

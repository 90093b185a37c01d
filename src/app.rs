//! Application shell: route table for the dashboard list views.
//!
//! Detail and creation routes belong to the wider dashboard and are not part
//! of this crate; navigations to them land on the fallback.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::bookings::BookingsPage;
use crate::pages::proposals::ProposalsPage;

/// Root component wiring the router to the list pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dealboard"/>
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <p class="app-shell__not-found">"Not found."</p> }>
                    <Route path=path!("/") view=BookingsPage/>
                    <Route path=path!("/proposals") view=ProposalsPage/>
                </Routes>
            </main>
        </Router>
    }
}

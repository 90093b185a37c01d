//! Card for one booking row on the bookings list.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::net::types::ListItem;

/// A clickable card linking to the booking's pipeline detail page.
#[component]
pub fn BookingCard(item: ListItem) -> impl IntoView {
    let href = format!("/pipeline/{}", item.id);
    view! {
        <Card href=href>
            <div class="list-card__info">
                <span class="list-card__title">{item.company_label()}</span>
                <span class="list-card__line">"Client: " {item.client_label()}</span>
                <span class="list-card__line">"Campaign: " {item.campaign_label()}</span>
            </div>
        </Card>
    }
}

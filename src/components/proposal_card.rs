//! Card for one proposal row on the proposals list.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::net::types::ListItem;

/// A clickable card linking to the proposal detail page, with category tags.
#[component]
pub fn ProposalCard(item: ListItem) -> impl IntoView {
    let href = format!("/proposal/{}", item.id);
    view! {
        <Card href=href>
            <div class="list-card__info">
                <span class="list-card__title">{item.company_label()}</span>
                <span class="list-card__line">"Client: " {item.client_label()}</span>
                <span class="list-card__line">"Campaign: " {item.campaign_label()}</span>
            </div>
            <div class="list-card__tags">
                <span class="list-card__tag list-card__tag--client-type">{item.client_type_label()}</span>
                <span class="list-card__tag list-card__tag--industry">{item.industry_label()}</span>
            </div>
        </Card>
    }
}

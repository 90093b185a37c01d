//! Pure derivation pipeline for the list views.
//!
//! Turns a fetched collection into the exact sequence of cards to render for
//! the current search term and page:
//!
//!     raw collection -> newest-first sort -> search filter -> page slice
//!
//! Every step is a pure function over in-memory slices so the pipeline can be
//! exercised without mounting a component.

#[cfg(test)]
#[path = "list_pipeline_test.rs"]
mod list_pipeline_test;

use crate::net::types::ListItem;

/// Sort a fetched collection newest first.
///
/// The sort is stable: records sharing a timestamp keep the order the API
/// returned them in.
pub fn sort_newest_first(items: &mut [ListItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Whether an item matches a search term.
///
/// Case-insensitive substring match over company, client, brand display, and
/// campaign names. Absent fields never match; an empty term matches every
/// item. Tag fields (client type, industry) are not searched.
#[must_use]
pub fn matches_search(item: &ListItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        &item.company_name,
        &item.client_name,
        &item.brand_display_name,
        &item.campaign_name,
    ]
    .into_iter()
    .any(|field| field.as_deref().is_some_and(|value| value.to_lowercase().contains(&needle)))
}

/// Filter a collection by search term, preserving order.
#[must_use]
pub fn filter_items(items: &[ListItem], term: &str) -> Vec<ListItem> {
    items.iter().filter(|item| matches_search(item, term)).cloned().collect()
}

/// Number of pages for a filtered collection.
///
/// Always at least 1 so the pager renders a page link even when the filter
/// matches nothing.
#[must_use]
pub fn total_pages(filtered_len: usize, per_page: usize) -> usize {
    if filtered_len == 0 || per_page == 0 {
        return 1;
    }
    filtered_len.div_ceil(per_page)
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
///
/// The pager only offers in-range pages; this guards programmatic callers.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// The slice of the filtered collection shown on `current_page`.
///
/// A page past the end of the collection yields an empty slice. That case is
/// reachable: shrinking the filter does not reset the stored page.
#[must_use]
pub fn page_slice(filtered: &[ListItem], current_page: usize, per_page: usize) -> Vec<ListItem> {
    let page = current_page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    if start >= filtered.len() {
        return Vec::new();
    }
    let end = start.saturating_add(per_page).min(filtered.len());
    filtered[start..end].to_vec()
}

//! Ephemeral per-view state for searchable, paginated list pages.
//!
//! DESIGN
//! ======
//! One struct per mounted list view, owned by a page-level signal. Nothing
//! here survives a navigation away; remounting a view rebuilds the state and
//! refetches the collection.

#[cfg(test)]
#[path = "list_view_test.rs"]
mod list_view_test;

use crate::net::types::ListItem;

/// Items rendered per page on the bookings and proposals views.
pub const PER_PAGE: usize = 10;

/// State for one searchable, paginated list view.
///
/// `current_page` is 1-based. Changing `search` intentionally leaves
/// `current_page` untouched, matching the shipped behavior; a shrunken
/// result set can therefore land on an empty page until the user picks a
/// page from the pager again.
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewState {
    pub items: Vec<ListItem>,
    pub search: String,
    pub current_page: usize,
    pub loading: bool,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            current_page: 1,
            loading: true,
        }
    }
}

use super::*;

#[test]
fn default_starts_loading_on_page_one() {
    let state = ListViewState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.search, "");
    assert_eq!(state.current_page, 1);
    assert!(state.loading);
}

#[test]
fn per_page_matches_list_layout() {
    assert_eq!(PER_PAGE, 10);
}

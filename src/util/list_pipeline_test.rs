use super::*;
use chrono::{TimeZone, Utc};

fn item(id: &str, company: Option<&str>) -> ListItem {
    ListItem {
        id: id.to_owned(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        company_name: company.map(str::to_owned),
        client_name: None,
        brand_display_name: None,
        campaign_name: None,
        client_type: None,
        industry: None,
    }
}

fn item_at(id: &str, day: u32) -> ListItem {
    let mut it = item(id, None);
    it.created_at = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
    it
}

// =============================================================
// sort_newest_first
// =============================================================

#[test]
fn sort_puts_most_recent_first() {
    let mut items = vec![item_at("old", 1), item_at("new", 20), item_at("mid", 10)];
    sort_newest_first(&mut items);
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["new", "mid", "old"]);
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let mut items = vec![item_at("a", 5), item_at("b", 5), item_at("c", 5), item_at("z", 9)];
    sort_newest_first(&mut items);
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["z", "a", "b", "c"]);
}

// =============================================================
// matches_search / filter_items
// =============================================================

#[test]
fn empty_term_matches_everything_in_order() {
    let items = vec![item("a", Some("Acme")), item("b", None), item("c", Some("Crux"))];
    let filtered = filter_items(&items, "");
    assert_eq!(filtered, items);
}

#[test]
fn match_is_case_insensitive_substring() {
    let acme = item("a", Some("Acme Corp"));
    assert!(matches_search(&acme, "acme"));
    assert!(matches_search(&acme, "CORP"));
    assert!(matches_search(&acme, "me co"));
    assert!(!matches_search(&acme, "beta"));
}

#[test]
fn every_searchable_field_participates() {
    let mut by_client = item("a", None);
    by_client.client_name = Some("Dana Whitfield".to_owned());
    let mut by_brand = item("b", None);
    by_brand.brand_display_name = Some("Northwind".to_owned());
    let mut by_campaign = item("c", None);
    by_campaign.campaign_name = Some("Spring Launch".to_owned());

    assert!(matches_search(&by_client, "whit"));
    assert!(matches_search(&by_brand, "northwind"));
    assert!(matches_search(&by_campaign, "spring"));
}

#[test]
fn absent_fields_never_match() {
    let bare = item("a", None);
    assert!(!matches_search(&bare, "a"));
}

#[test]
fn tag_fields_are_not_searched() {
    let mut tagged = item("a", None);
    tagged.client_type = Some("Agency".to_owned());
    tagged.industry = Some("Retail".to_owned());
    assert!(!matches_search(&tagged, "agency"));
    assert!(!matches_search(&tagged, "retail"));
}

#[test]
fn filter_keeps_only_matches() {
    let items = vec![item("a", Some("Acme Corp")), item("b", Some("Beta LLC")), item("c", None)];
    let filtered = filter_items(&items, "acme");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "a");
}

// =============================================================
// total_pages / clamp_page
// =============================================================

#[test]
fn total_pages_is_ceiling_division() {
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(30, 10), 3);
    assert_eq!(total_pages(31, 10), 4);
    assert_eq!(total_pages(1, 10), 1);
}

#[test]
fn total_pages_is_one_for_empty_results() {
    assert_eq!(total_pages(0, 10), 1);
}

#[test]
fn total_pages_guards_zero_page_size() {
    assert_eq!(total_pages(25, 0), 1);
}

#[test]
fn clamp_page_bounds_requests() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(1, 3), 1);
    assert_eq!(clamp_page(3, 3), 3);
    assert_eq!(clamp_page(7, 3), 3);
    assert_eq!(clamp_page(5, 0), 1);
}

// =============================================================
// page_slice
// =============================================================

#[test]
fn twenty_five_items_paginate_as_ten_ten_five() {
    let items: Vec<ListItem> = (1..=25).map(|n| item(&format!("i{n}"), Some("Co"))).collect();
    let filtered = filter_items(&items, "");

    assert_eq!(total_pages(filtered.len(), 10), 3);
    assert_eq!(page_slice(&filtered, 1, 10).len(), 10);
    assert_eq!(page_slice(&filtered, 2, 10).len(), 10);
    assert_eq!(page_slice(&filtered, 3, 10).len(), 5);
}

#[test]
fn concatenated_pages_reconstruct_the_filtered_sequence() {
    let items: Vec<ListItem> = (1..=23).map(|n| item(&format!("i{n}"), Some("Co"))).collect();
    let pages = total_pages(items.len(), 10);

    let mut rebuilt = Vec::new();
    for page in 1..=pages {
        let slice = page_slice(&items, page, 10);
        assert!(slice.len() <= 10);
        rebuilt.extend(slice);
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn out_of_range_page_yields_empty_slice() {
    let items: Vec<ListItem> = (1..=5).map(|n| item(&format!("i{n}"), Some("Co"))).collect();
    assert!(page_slice(&items, 2, 10).is_empty());
    assert!(page_slice(&items, 99, 10).is_empty());
}

#[test]
fn page_zero_is_treated_as_page_one() {
    let items: Vec<ListItem> = (1..=5).map(|n| item(&format!("i{n}"), Some("Co"))).collect();
    assert_eq!(page_slice(&items, 0, 10), page_slice(&items, 1, 10));
}

#[test]
fn shrinking_filter_can_strand_the_stored_page() {
    // The stored page is not reset on a new search term; the resulting empty
    // page renders rather than panics.
    let items: Vec<ListItem> = (1..=15).map(|n| item(&format!("i{n}"), Some("Co"))).collect();
    let current_page = 2;

    let narrowed = filter_items(&items, "no-such-company");
    assert!(page_slice(&narrowed, current_page, 10).is_empty());
    assert_eq!(total_pages(narrowed.len(), 10), 1);
}

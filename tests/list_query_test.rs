//! List query engine scenarios over transfer collections.

use serde_json::json;

use dusangire_admin::domain::Transfer;
use dusangire_admin::types::{Filter, ListQuery};

fn transfer(id: i64, donor: &str, code: &str) -> Transfer {
    serde_json::from_value(json!({
        "id": id,
        "Donor": donor,
        "SchoolCode": code,
        "Amount": 1000,
    }))
    .unwrap()
}

fn numbered(count: usize) -> Vec<Transfer> {
    (1..=count as i64)
        .map(|i| transfer(i, "ACME", &format!("GS-{:03}", i)))
        .collect()
}

fn donor_filter(value: &str) -> Filter<Transfer> {
    Filter::new("donor", |t: &Transfer| t.donor.clone(), value)
}

#[test]
fn pages_slice_cleanly_at_the_standard_size() {
    let transfers = numbered(23);
    let engine = Transfer::query_engine();

    let first = engine.page(&transfers, &ListQuery::new().page(1));
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].id, 1);
    assert_eq!(first.items[9].id, 10);

    let third = engine.page(&transfers, &ListQuery::new().page(3));
    assert_eq!(third.items.len(), 3);
    assert_eq!(third.items[0].id, 21);
    assert_eq!(third.items[2].id, 23);
    assert_eq!(third.meta.total_pages, 3);

    // A page past the end is empty, not an error.
    let beyond = engine.page(&transfers, &ListQuery::new().page(4));
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.meta.total, 23);
}

#[test]
fn donor_filter_preserves_relative_order() {
    let transfers = vec![
        transfer(1, "A", "GS-001"),
        transfer(2, "B", "GS-002"),
        transfer(3, "A", "GS-003"),
    ];
    let engine = Transfer::query_engine();

    let result = engine.page(&transfers, &ListQuery::new().filter(donor_filter("A")));
    assert_eq!(result.meta.total, 2);
    assert_eq!(result.items[0].id, 1);
    assert_eq!(result.items[1].id, 3);
}

#[test]
fn empty_filter_value_matches_everything() {
    let transfers = numbered(5);
    let engine = Transfer::query_engine();

    let result = engine.page(&transfers, &ListQuery::new().filter(donor_filter("")));
    assert_eq!(result.meta.total, 5);
}

#[test]
fn filter_matching_nothing_yields_zero_pages_without_error() {
    let transfers = numbered(5);
    let engine = Transfer::query_engine();

    let result = engine.page(&transfers, &ListQuery::new().filter(donor_filter("Nobody")));
    assert!(result.items.is_empty());
    assert_eq!(result.meta.total, 0);
    assert_eq!(result.meta.total_pages, 0);
}

#[test]
fn unique_term_survives_any_non_excluding_filter() {
    let transfers = numbered(23);
    let engine = Transfer::query_engine();

    let query = ListQuery::new().term("gs-017").filter(donor_filter("ACME"));
    let result = engine.page(&transfers, &query);
    assert_eq!(result.meta.total, 1);
    assert_eq!(result.items[0].id, 17);
    // GS-017 sits at index 16 of the raw collection: page 2 at size 10.
    assert_eq!(result.meta.first_match_page, Some(2));
}

#[test]
fn text_and_filter_predicates_combine_with_and() {
    let transfers = vec![
        transfer(1, "A", "GS-100"),
        transfer(2, "B", "GS-100"),
        transfer(3, "A", "GS-200"),
    ];
    let engine = Transfer::query_engine();

    let query = ListQuery::new().term("100").filter(donor_filter("A"));
    let result = engine.page(&transfers, &query);
    assert_eq!(result.meta.total, 1);
    assert_eq!(result.items[0].id, 1);
}

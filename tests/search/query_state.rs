//! Query state: idle/searching transitions and the two result views.

use crate::common::{make_item, portfolio_index};
use folio_search::{build_index, Matcher, QueryState, SearchState, DROPDOWN_LIMIT};

#[test]
fn test_whitespace_query_is_not_searching() {
    let index = portfolio_index();
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    state.set_query("   ");
    assert!(!state.is_searching());
    assert_eq!(state.state(), SearchState::Idle);
    assert!(state.results().is_empty());
    assert!(state.all_results().is_empty());
}

#[test]
fn test_transitions() {
    let index = portfolio_index();
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    assert_eq!(state.state(), SearchState::Idle);

    state.set_query("react");
    assert_eq!(state.state(), SearchState::Searching);
    assert!(!state.results().is_empty());

    state.set_query("");
    assert_eq!(state.state(), SearchState::Idle);
    assert!(state.results().is_empty());
}

#[test]
fn test_views_share_ordering() {
    let items: Vec<_> = (0..20)
        .map(|i| make_item(&format!("note-{}", i), &format!("Note {}", i)))
        .collect();
    let index = build_index(&items);
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    state.set_query("note");

    let all = state.all_results().to_vec();
    assert_eq!(all.len(), 20);
    assert_eq!(state.results().len(), DROPDOWN_LIMIT);
    assert_eq!(state.results(), &all[..DROPDOWN_LIMIT]);
}

#[test]
fn test_fewer_matches_than_cap() {
    let index = portfolio_index();
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    state.set_query("storefront");
    assert_eq!(state.results(), state.all_results());
    assert!(state.results().len() < DROPDOWN_LIMIT);
}

#[test]
fn test_state_agrees_with_matcher() {
    let index = portfolio_index();
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    state.set_query("dashboard");
    assert_eq!(state.all_results(), matcher.search("dashboard", &index).as_slice());
}

#[test]
fn test_long_title_ending_in_query_is_found() {
    let items = vec![make_item(
        "headless-commerce",
        "Building a Headless Commerce Platform with Next.js and Stripe",
    )];
    let index = build_index(&items);
    let matcher = Matcher::default();
    let mut state = QueryState::new(&index, &matcher);
    state.set_query("stripe");
    assert!(state.is_searching());
    assert_eq!(state.all_results().len(), 1);
    assert_eq!(state.results()[0].record.id, "post:headless-commerce");
}

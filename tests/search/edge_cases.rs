//! Edge cases: empty queries, empty indexes, odd input.

use crate::common::{make_item, portfolio_index};
use folio_search::{build_index, compute, ContentItem, Matcher, MatcherConfig, SearchIndex};

#[test]
fn test_empty_query_returns_nothing() {
    let index = portfolio_index();
    assert!(Matcher::default().search("", &index).is_empty());
}

#[test]
fn test_whitespace_query_returns_nothing() {
    let index = portfolio_index();
    for query in ["   ", "\t", "\n  \r\n", "\u{3000}"] {
        assert!(
            Matcher::default().search(query, &index).is_empty(),
            "query {:?} should match nothing",
            query
        );
    }
}

#[test]
fn test_empty_index() {
    let index = SearchIndex::default();
    assert!(Matcher::default().search("react", &index).is_empty());
}

#[test]
fn test_query_padding_is_ignored() {
    let index = portfolio_index();
    let matcher = Matcher::default();
    assert_eq!(
        matcher.search("  React  ", &index),
        matcher.search("react", &index)
    );
}

#[test]
fn test_query_longer_than_every_field() {
    let index = build_index(&vec![make_item("a", "Go")]);
    let query = "an extremely long query that cannot fit in a two letter title";
    assert!(Matcher::default().search(query, &index).is_empty());
}

#[test]
fn test_single_character_query() {
    let index = build_index(&vec![make_item("a", "Go"), make_item("b", "Rust")]);
    let results = Matcher::default().search("g", &index);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.title, "Go");
}

#[test]
fn test_untitled_items_never_surface() {
    let untitled = ContentItem {
        kind: "post".to_string(),
        slug: "untitled".to_string(),
        description: Some("react react react".to_string()),
        ..ContentItem::default()
    };
    let index = build_index(&vec![untitled]);
    assert!(compute("react", &index, &MatcherConfig::default()).is_empty());
}

//! Ranking tests: field weights, typo tolerance, tie-breaking.

use crate::common::{make_full_item, make_item_with_tags, portfolio_index, titles};
use folio_search::{build_index, Field, Matcher, MatcherConfig, WeightedField};

#[test]
fn test_react_hooks_scenario() {
    let items = vec![
        make_item_with_tags("hooks", "React Hooks Guide", &["react"]),
        make_item_with_tags("css", "CSS Basics", &["css"]),
    ];
    let index = build_index(&items);
    let results = Matcher::default().search("react", &index);
    assert_eq!(results[0].record.title, "React Hooks Guide");
}

#[test]
fn test_title_hit_ranks_first_in_portfolio() {
    let index = portfolio_index();
    let results = Matcher::default().search("react", &index);
    assert_eq!(results[0].record.title, "React Hooks Guide");
    assert_eq!(results[0].matched_field, Field::Title);

    // The next two only carry "react" as a tag; anything after that is a
    // description-only typo match
    let mut tagged = titles(&results[1..3]);
    tagged.sort();
    assert_eq!(tagged, vec!["Analytics Dashboard", "TypeScript Generics"]);
    assert!(results[1..3].iter().all(|r| r.matched_field == Field::Tags));
    assert!(results[3..].iter().all(|r| r.matched_field == Field::Description));
}

#[test]
fn test_title_match_ranks_at_least_as_high() {
    // Identical description and tags; only one title contains the term
    let items = vec![
        make_full_item("post", "a", "Weekly notes", "thoughts on design", &["notes"]),
        make_full_item("post", "b", "Design systems", "thoughts on design", &["notes"]),
    ];
    let index = build_index(&items);
    let results = Matcher::default().search("design", &index);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.title, "Design systems");
    assert!(results[0].score <= results[1].score);
}

#[test]
fn test_typo_still_finds_title() {
    let index = portfolio_index();
    let results = Matcher::default().search("dashbord", &index);
    assert_eq!(results[0].record.title, "Analytics Dashboard");
}

#[test]
fn test_partial_word() {
    let index = portfolio_index();
    let results = Matcher::default().search("store", &index);
    assert_eq!(results[0].record.title, "Acme Storefront");
}

#[test]
fn test_diacritics_are_ignored() {
    let items = vec![make_item_with_tags("cafe", "Café Branding", &["identity"])];
    let index = build_index(&items);
    let results = Matcher::default().search("cafe", &index);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_stricter_threshold_filters_typos() {
    let index = portfolio_index();
    let strict = Matcher::new(MatcherConfig {
        threshold: 0.0,
        ..MatcherConfig::default()
    })
    .unwrap();
    assert!(strict.search("dashbord", &index).is_empty());
    assert!(!strict.search("react", &index).is_empty());
}

#[test]
fn test_exact_title_hit_beats_title_typo_wherever_it_starts() {
    let items = vec![
        make_full_item("post", "plain", "Desgin notes", "weekly log", &["notes"]),
        make_full_item(
            "post",
            "titled",
            "Notes from a long week of shipping the new portfolio design",
            "weekly log",
            &["notes"],
        ),
    ];
    let index = build_index(&items);
    let results = Matcher::default().search("design", &index);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.id, "post:titled");
    assert_eq!(results[0].matched_field, Field::Title);
    assert!(results[0].score < results[1].score);
}

#[test]
fn test_location_orders_but_never_drops() {
    let long_prefix = "x".repeat(60);
    let items = vec![
        make_full_item("post", "far", "Unrelated title", &format!("{} kubernetes", long_prefix), &[]),
        make_full_item("post", "near", "Unrelated title", "kubernetes in practice", &[]),
    ];
    let index = build_index(&items);

    // 61 characters in is still an exact match, just ranked after the near one
    let results = Matcher::default().search("kubernetes", &index);
    let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
    assert_eq!(ids, vec!["post:near", "post:far"]);
    assert!(results.iter().all(|r| r.matched_field == Field::Description));
    assert!(results[0].score < results[1].score);

    let anywhere = Matcher::new(MatcherConfig {
        ignore_location: true,
        ..MatcherConfig::default()
    })
    .unwrap();
    let results = anywhere.search("kubernetes", &index);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].record.id, "post:far");
}

#[test]
fn test_custom_field_set() {
    let index = portfolio_index();
    let titles_only = Matcher::new(MatcherConfig {
        fields: vec![WeightedField::new(Field::Title, 1.0)],
        ..MatcherConfig::default()
    })
    .unwrap();
    let results = titles_only.search("react", &index);
    assert_eq!(titles(&results), vec!["React Hooks Guide"]);
    assert_eq!(results[0].score, 0.0);
}

//! Tests for loading content directories.

use crate::common::{portfolio_items, set_include, write_content_dir};
use folio_search::{load_content, ContentError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_content_round_trips_items() {
    let dir = TempDir::new().unwrap();
    let items = portfolio_items();
    write_content_dir(dir.path(), &items);

    let loaded = load_content(dir.path()).unwrap();
    assert_eq!(loaded, items);
}

#[test]
fn test_load_content_applies_include_filter() {
    let dir = TempDir::new().unwrap();
    write_content_dir(dir.path(), &portfolio_items());

    set_include(dir.path(), serde_json::json!({ "kind": "work" }));

    let loaded = load_content(dir.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.iter().all(|item| item.kind == "work"));
}

#[test]
fn test_load_content_accepts_type_alias() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "documents": ["a.json"]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"{"type": "work", "slug": "a", "title": "A", "excerpt": "short"}"#,
    )
    .unwrap();

    let loaded = load_content(dir.path()).unwrap();
    assert_eq!(loaded[0].kind, "work");
    assert_eq!(loaded[0].description.as_deref(), Some("short"));
}

#[test]
fn test_load_content_bad_document() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "documents": ["bad.json"]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("bad.json"), r#"{"title": "no slug or kind"}"#).unwrap();

    let err = load_content(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

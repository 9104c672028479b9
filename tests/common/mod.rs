//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio_search::{build_index, ContentItem, SearchIndex};
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from folio_search::testing
pub use folio_search::testing::{make_full_item, make_item, make_item_with_tags};

/// A small portfolio: three blog posts and two case studies.
pub fn portfolio_items() -> Vec<ContentItem> {
    vec![
        make_full_item(
            "post",
            "react-hooks-guide",
            "React Hooks Guide",
            "A practical tour of useState, useEffect and custom hooks",
            &["react", "javascript"],
        ),
        make_full_item(
            "post",
            "css-basics",
            "CSS Basics",
            "Selectors, the cascade and layout fundamentals",
            &["css"],
        ),
        make_full_item(
            "post",
            "typescript-generics",
            "TypeScript Generics",
            "Writing reusable, type-safe React components",
            &["typescript", "react"],
        ),
        make_full_item(
            "work",
            "acme-storefront",
            "Acme Storefront",
            "Headless commerce rebuild with Next.js",
            &["nextjs", "ecommerce"],
        ),
        make_full_item(
            "work",
            "analytics-dashboard",
            "Analytics Dashboard",
            "Realtime charts for a logistics startup",
            &["dataviz", "react"],
        ),
    ]
}

/// Index over [`portfolio_items`].
pub fn portfolio_index() -> SearchIndex {
    build_index(&portfolio_items())
}

/// Write items as a content directory: one JSON file per item plus manifest.json.
pub fn write_content_dir(dir: &Path, items: &[ContentItem]) {
    let mut names = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let name = format!("{:03}-{}.json", i, item.slug);
        fs::write(dir.join(&name), serde_json::to_string(item).unwrap()).unwrap();
        names.push(name);
    }
    let manifest = serde_json::json!({ "version": 1, "documents": names });
    fs::write(dir.join("manifest.json"), manifest.to_string()).unwrap();
}

/// Add an `include` filter to a content directory's manifest.
pub fn set_include(dir: &Path, include: serde_json::Value) {
    let path = dir.join("manifest.json");
    let mut manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    manifest["include"] = include;
    fs::write(path, manifest.to_string()).unwrap();
}

/// Titles of results, in rank order.
pub fn titles(results: &[folio_search::MatchResult]) -> Vec<String> {
    results.iter().map(|r| r.record.title.clone()).collect()
}

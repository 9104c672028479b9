//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::ContentItem;
use crate::types::SearchRecord;

/// Create a blog post content item with a title and nothing else.
pub fn make_item(slug: &str, title: &str) -> ContentItem {
    ContentItem {
        kind: "post".to_string(),
        slug: slug.to_string(),
        title: Some(title.to_string()),
        description: None,
        tags: None,
        url: None,
    }
}

/// Create a blog post content item with tags.
pub fn make_item_with_tags(slug: &str, title: &str, tags: &[&str]) -> ContentItem {
    ContentItem {
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..make_item(slug, title)
    }
}

/// Create a fully populated content item.
pub fn make_full_item(
    kind: &str,
    slug: &str,
    title: &str,
    description: &str,
    tags: &[&str],
) -> ContentItem {
    ContentItem {
        kind: kind.to_string(),
        description: Some(description.to_string()),
        ..make_item_with_tags(slug, title, tags)
    }
}

/// Create a bare record directly, bypassing the index builder.
pub fn make_record(id: usize, title: &str) -> SearchRecord {
    SearchRecord {
        id: format!("post:{}", id),
        title: title.to_string(),
        description: None,
        tags: None,
        url: format!("/blog/{}", id),
    }
}

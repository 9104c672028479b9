// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: content items in, search records out.
//!
//! The build is a pure, order-preserving transformation. Items that cannot
//! become a record are excluded instead of failing the build, and every
//! exclusion is recorded on the index so the caller can report it.
//!
//! # Exclusion policy
//!
//! - Title missing or blank: excluded (`MissingTitle`).
//! - Id already produced by an earlier item: excluded (`DuplicateId`).
//!   The first occurrence wins, which keeps ids unique.

use crate::build::ContentItem;
use crate::types::{Exclusion, ExclusionReason, SearchIndex, SearchRecord};
use std::collections::HashSet;

/// Build a search index from content items, preserving source order.
pub fn build_index<'a, I>(items: I) -> SearchIndex
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut records = Vec::new();
    let mut exclusions = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (position, item) in items.into_iter().enumerate() {
        let exclude = |reason| Exclusion {
            position,
            slug: item.slug.clone(),
            document: None,
            reason,
        };

        let Some(record) = to_record(item) else {
            exclusions.push(exclude(ExclusionReason::MissingTitle));
            continue;
        };
        if !seen.insert(record.id.clone()) {
            exclusions.push(exclude(ExclusionReason::DuplicateId { id: record.id }));
            continue;
        }
        records.push(record);
    }

    tracing::debug!(
        records = records.len(),
        excluded = exclusions.len(),
        "built search index"
    );

    SearchIndex::new(records, exclusions)
}

/// Project one content item into a record. `None` when it has no usable title.
pub fn to_record(item: &ContentItem) -> Option<SearchRecord> {
    let title = item.title.as_deref().map(str::trim).filter(|t| !t.is_empty())?;

    let description = item
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let tags = item
        .tags
        .as_ref()
        .map(|tags| {
            tags.iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|tags| !tags.is_empty());

    Some(SearchRecord {
        id: item.computed_id(),
        title: title.to_string(),
        description,
        tags,
        url: item.computed_url(),
    })
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted fuzzy search over portfolio content.
//!
//! Blog posts and case studies are flattened into [`SearchRecord`]s, then
//! matched against free-text queries with typo tolerance. Title hits count
//! more than tag hits, which count more than description hits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  build/     │────▶│  index.rs    │────▶│  search/     │────▶│ search/state │
//! │ (ContentItem│     │ (build_index,│     │ (Matcher,    │     │ (QueryState, │
//! │  loading)   │     │  exclusions) │     │  compute)    │     │  dropdown)   │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                   ┌─────────────┴────────────┐
//!                                   ▼                          ▼
//!                          ┌────────────────┐        ┌──────────────────┐
//!                          │ fuzzy/         │        │ scoring/         │
//!                          │ (approximate   │        │ (field weights,  │
//!                          │  substrings)   │        │  ranking)        │
//!                          └────────────────┘        └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio_search::{build_index, ContentItem, Matcher, QueryState};
//!
//! let items = vec![ContentItem {
//!     kind: "post".into(),
//!     slug: "hooks".into(),
//!     title: Some("React Hooks Guide".into()),
//!     tags: Some(vec!["react".into()]),
//!     ..ContentItem::default()
//! }];
//! let index = build_index(&items);
//! let matcher = Matcher::default();
//!
//! let mut state = QueryState::new(&index, &matcher);
//! state.set_query("react");
//! assert_eq!(state.results()[0].record.url, "/blog/hooks");
//! ```

pub mod build;
pub mod config;
mod fuzzy;
mod index;
mod scoring;
mod search;
mod types;
mod utils;

pub mod testing;

// Re-exports for public API
pub use build::{load_content, ContentError, ContentItem};
pub use config::{ConfigError, MatcherConfig};
pub use fuzzy::{best_substring_match, SubstringMatch};
pub use index::{build_index, to_record};
pub use scoring::ranking::compare_results;
pub use scoring::{
    combine_scores, field_score, DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD,
    DESCRIPTION_WEIGHT, NO_MATCH_SCORE, PROXIMITY_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT,
};
pub use search::{compute, Matcher, QueryState, SearchState, DROPDOWN_LIMIT};
pub use types::{
    Exclusion, ExclusionReason, Field, MatchResult, SearchIndex, SearchRecord, WeightedField,
};
pub use utils::normalize;

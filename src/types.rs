// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! A content item goes in, a `SearchRecord` comes out, and a query turns
//! records into `MatchResult`s. Records are immutable once the index is built;
//! results are derived on every query and never stored.
//!
//! # Invariants
//!
//! - **SearchIndex**: record ids are unique; records keep the source order of
//!   the content items they came from.
//! - **MatchResult**: `0.0 <= score <= 1.0`, lower is better.
//! - **WeightedField**: `weight > 0` and finite (checked by `MatcherConfig::validate`).

use crate::utils::normalize_chars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A flattened, searchable projection of one content item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// `"{kind}:{slug}"`, unique within one index build.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub url: String,
}

impl SearchRecord {
    /// Raw (un-normalized) texts for a field. Tags yield one entry per tag;
    /// absent fields yield nothing.
    pub fn field_texts(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Title => vec![self.title.as_str()],
            Field::Description => self.description.iter().map(String::as_str).collect(),
            Field::Tags => self
                .tags
                .iter()
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Which part of a record a query matched against.
///
/// Declaration order follows influence on the score: Title > Tags > Description.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Tags,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Tags => "tags",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

/// A field and how much it contributes to the combined score.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WeightedField {
    pub name: Field,
    pub weight: f64,
}

impl WeightedField {
    pub const fn new(name: Field, weight: f64) -> Self {
        Self { name, weight }
    }
}

/// A record paired with how well it matched the query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub record: SearchRecord,
    /// Combined score in `[0, 1]`; `0.0` is a perfect match.
    pub score: f64,
    /// Position of the record in the index. Breaks score ties.
    pub ref_index: usize,
    /// The field with the best individual score.
    pub matched_field: Field,
}

/// Why a content item did not make it into the index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum ExclusionReason {
    /// Title absent or blank.
    MissingTitle,
    /// An earlier item already produced this id.
    DuplicateId { id: String },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::MissingTitle => write!(f, "missing title"),
            ExclusionReason::DuplicateId { id } => write!(f, "duplicate id '{}'", id),
        }
    }
}

/// A content item that was dropped at index-build time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    /// Position of the item in the input sequence. For a content-directory
    /// build, its index in the manifest's `documents`.
    pub position: usize,
    /// Slug of the item, for log messages.
    pub slug: String,
    /// Manifest entry the item was loaded from, when built from a content directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(flatten)]
    pub reason: ExclusionReason,
}

/// Normalized characters of one record's searchable fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NormalizedRecord {
    title: Vec<Vec<char>>,
    tags: Vec<Vec<char>>,
    description: Vec<Vec<char>>,
}

impl NormalizedRecord {
    pub(crate) fn new(record: &SearchRecord) -> Self {
        let normalize = |field: Field| -> Vec<Vec<char>> {
            record
                .field_texts(field)
                .into_iter()
                .map(normalize_chars)
                .collect()
        };
        Self {
            title: normalize(Field::Title),
            tags: normalize(Field::Tags),
            description: normalize(Field::Description),
        }
    }

    /// One entry per text in the field, same order as [`SearchRecord::field_texts`].
    pub(crate) fn texts(&self, field: Field) -> &[Vec<char>] {
        match field {
            Field::Title => &self.title,
            Field::Tags => &self.tags,
            Field::Description => &self.description,
        }
    }
}

/// Normalized record text, filled on first search. Never serialized and
/// ignored by equality: it is a pure function of the records.
#[derive(Clone, Debug, Default)]
struct NormalizedCache(OnceLock<Vec<NormalizedRecord>>);

impl PartialEq for NormalizedCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for NormalizedCache {}

/// The complete searchable index: records in source order plus the items
/// that were left out.
///
/// Records cannot be changed after construction, so the normalized text the
/// matcher works on is computed once and shared by every query.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    pub version: u32,
    records: Vec<SearchRecord>,
    #[serde(default)]
    exclusions: Vec<Exclusion>,
    #[serde(skip)]
    normalized: NormalizedCache,
}

impl SearchIndex {
    /// Serialization format version.
    pub const VERSION: u32 = 1;

    pub fn new(records: Vec<SearchRecord>, exclusions: Vec<Exclusion>) -> Self {
        Self {
            version: Self::VERSION,
            records,
            exclusions,
            normalized: NormalizedCache::default(),
        }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SearchRecord> {
        self.records.get(position)
    }

    /// Whether the normalized record text has been computed yet.
    pub fn is_prepared(&self) -> bool {
        self.normalized.0.get().is_some()
    }

    /// Normalized text for every record, parallel to [`Self::records`].
    pub(crate) fn normalized(&self) -> &[NormalizedRecord] {
        self.normalized
            .0
            .get_or_init(|| self.records.iter().map(NormalizedRecord::new).collect())
    }

    /// Rewrite exclusions in place, e.g. to point them back at manifest entries.
    pub(crate) fn update_exclusions<F>(&mut self, f: F)
    where
        F: FnMut(&mut Exclusion),
    {
        self.exclusions.iter_mut().for_each(f);
    }
}

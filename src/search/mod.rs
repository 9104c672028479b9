// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search over a built index.
//!
//! The flow for one query:
//!
//! ```text
//! query ──normalize──▶ pattern
//!                        │
//!          for each record, for each weighted field:
//!                        ▼
//!        best_substring_match(pattern, normalized field text)
//!                        │ field_score
//!                        ▼
//!        matched if errors / pattern_len <= threshold
//!                        │ combine_scores (weighted mean)
//!                        ▼
//!        keep record if any field matched ──▶ rank
//! ```
//!
//! Everything here is synchronous and allocation-bounded by the index size.
//! Record text is normalized once per index (see [`SearchIndex`]); only the
//! query is normalized per search. Callers own the index and pass it in.

pub mod state;

use crate::config::{ConfigError, MatcherConfig};
use crate::fuzzy::best_substring_match;
use crate::scoring::ranking::rank;
use crate::scoring::{combine_scores, field_score};
use crate::types::{Field, MatchResult, NormalizedRecord, SearchIndex, SearchRecord};
use crate::utils::normalize_chars;

pub use state::{QueryState, SearchState, DROPDOWN_LIMIT};

/// Scores records against queries with a fixed, validated configuration.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// All matching records, best first. Empty or whitespace-only queries
    /// match nothing.
    pub fn search(&self, query: &str, index: &SearchIndex) -> Vec<MatchResult> {
        let pattern = normalize_chars(query);
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = index
            .records()
            .iter()
            .zip(index.normalized())
            .enumerate()
            .filter_map(|(ref_index, (record, text))| {
                self.score_record(&pattern, record, text, ref_index)
            })
            .collect();

        rank(&mut results);

        tracing::debug!(
            query,
            candidates = index.len(),
            matched = results.len(),
            "fuzzy search"
        );
        results
    }

    /// Score one record, or `None` if no field is within the threshold.
    fn score_record(
        &self,
        pattern: &[char],
        record: &SearchRecord,
        text: &NormalizedRecord,
        ref_index: usize,
    ) -> Option<MatchResult> {
        let mut per_field: Vec<(f64, Option<f64>)> = Vec::with_capacity(self.config.fields.len());
        let mut best: Option<(Field, f64)> = None;

        for weighted in &self.config.fields {
            let score = self.field_best(pattern, text.texts(weighted.name));

            if let Some(s) = score {
                // Strictly better only, so the earlier (heavier) field keeps ties.
                if best.is_none_or(|(_, b)| s < b) {
                    best = Some((weighted.name, s));
                }
            }
            per_field.push((weighted.weight, score));
        }

        let (matched_field, _) = best?;
        Some(MatchResult {
            record: record.clone(),
            score: combine_scores(per_field),
            ref_index,
            matched_field,
        })
    }

    /// Best matching score across every text of a field (one per tag).
    fn field_best(&self, pattern: &[char], texts: &[Vec<char>]) -> Option<f64> {
        texts
            .iter()
            .filter_map(|text| best_substring_match(pattern, text, self.config.location))
            .filter_map(|m| field_score(m, pattern.len(), &self.config))
            .min_by(f64::total_cmp)
    }
}

/// Run one query against an index: the pure entry point a host calls on
/// every query change.
pub fn compute(query: &str, index: &SearchIndex, config: &MatcherConfig) -> Vec<MatchResult> {
    Matcher {
        config: config.clone(),
    }
    .search(query, index)
}

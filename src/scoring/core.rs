// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scores.
//!
//! Every score lives in `[0, 1]` and lower is better. A field matches when its
//! edit ratio (`errors / pattern_len`) is within the threshold. Its score is
//! that edit ratio plus a proximity penalty worth at most half an edit, so an
//! exact hit deep in a field still beats any typo near the front. The record
//! score is the weighted mean of its field scores, where a field that did not
//! match (or is absent) counts as the worst score, 1.0.
//!
//! # Key Invariant: Field Weight Ordering
//!
//! Improving a field score by `d` lowers the record score by
//! `d * weight / total_weight`. With Title (2.0) > Tags (1.5) > Description
//! (1.0), the same textual similarity moves the record furthest when it
//! happens in the title.
//!
//! | Field       | Weight |
//! |-------------|--------|
//! | Title       | 2.0    |
//! | Tags        | 1.5    |
//! | Description | 1.0    |

use crate::config::MatcherConfig;
use crate::fuzzy::SubstringMatch;

/// Weight of title matches.
pub const TITLE_WEIGHT: f64 = 2.0;

/// Weight of tag matches.
pub const TAGS_WEIGHT: f64 = 1.5;

/// Weight of description matches.
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Field scores above this are not matches.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Expected match position within a field.
pub const DEFAULT_LOCATION: usize = 0;

/// Characters of drift from `location` at which the proximity penalty peaks.
pub const DEFAULT_DISTANCE: usize = 100;

/// Largest proximity penalty, in edits.
pub const PROXIMITY_WEIGHT: f64 = 0.5;

/// Score given to a field that did not match or is absent.
pub const NO_MATCH_SCORE: f64 = 1.0;

/// Score of one alignment of the query inside a field, or `None` when it has
/// more errors than the threshold allows.
///
/// Only the edit ratio is held against the threshold; proximity orders
/// matches with the same error count. `pattern_len` must be non-zero; the
/// matcher never scores empty queries.
pub fn field_score(m: SubstringMatch, pattern_len: usize, config: &MatcherConfig) -> Option<f64> {
    let len = pattern_len as f64;
    let errors = m.errors as f64;
    if errors / len > config.threshold {
        return None;
    }
    if config.ignore_location {
        return Some((errors / len).min(NO_MATCH_SCORE));
    }

    let proximity = (m.start.abs_diff(config.location) as f64 / config.distance as f64).min(1.0);
    Some(((errors + PROXIMITY_WEIGHT * proximity) / len).min(NO_MATCH_SCORE))
}

/// Weighted mean of per-field scores.
///
/// `scores` pairs each configured weight with that field's score, or `None`
/// when the field did not match.
pub fn combine_scores<I>(scores: I) -> f64
where
    I: IntoIterator<Item = (f64, Option<f64>)>,
{
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (weight, score) in scores {
        weighted += weight * score.unwrap_or(NO_MATCH_SCORE);
        total += weight;
    }
    if total > 0.0 {
        (weighted / total).clamp(0.0, 1.0)
    } else {
        NO_MATCH_SCORE
    }
}

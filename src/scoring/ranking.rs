// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how match results get sorted.
//!
//! Sort order:
//! 1. **Score** ascending (0.0 is a perfect match)
//! 2. **Index position** ascending, so ties keep source order

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two match results for ranking.
///
/// Scores are never NaN (they come out of `combine_scores` clamped), but
/// `total_cmp` keeps the order total regardless.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.ref_index.cmp(&b.ref_index))
}

/// Sort results best-first.
pub fn rank(results: &mut [MatchResult]) {
    results.sort_by(compare_results);
}

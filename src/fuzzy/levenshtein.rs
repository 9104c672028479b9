// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching (Sellers' algorithm).
//!
//! Plain Levenshtein compares whole strings, which is useless for "hooks"
//! against "react hooks guide". Sellers' variant makes the first DP row all
//! zeros, so the pattern may start at any position in the text for free. The
//! last row then holds, for each end position, the fewest edits needed to turn
//! some substring ending there into the pattern.
//!
//! We also carry the start position of each alignment along with its cost so
//! the scorer can prefer matches close to an expected location.

/// Best alignment of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Edit operations needed (insertions, deletions, substitutions).
    pub errors: usize,
    /// Character offset in the text where the aligned substring begins.
    pub start: usize,
}

/// Find the cheapest approximate occurrence of `pattern` in `text`.
///
/// Returns `None` for an empty pattern. For an empty text the match costs
/// `pattern.len()` edits (delete everything) and starts at 0.
///
/// Fewest errors wins. Among alignments with equal cost, the one starting
/// closest to `location` wins, then the earliest, so results are deterministic.
pub fn best_substring_match(
    pattern: &[char],
    text: &[char],
    location: usize,
) -> Option<SubstringMatch> {
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // Column for "no text consumed yet": aligning pattern[..i] costs i deletions.
    let mut cost: Vec<usize> = (0..=m).collect();
    let mut start: Vec<usize> = vec![0; m + 1];

    let mut best = SubstringMatch {
        errors: cost[m],
        start: 0,
    };

    for (j, &tc) in text.iter().enumerate() {
        // Free start: the empty pattern prefix aligns after text[..=j] at no cost.
        let mut diag_cost = cost[0];
        let mut diag_start = start[0];
        cost[0] = 0;
        start[0] = j + 1;

        for i in 1..=m {
            let up_cost = cost[i];
            let up_start = start[i];

            let sub = diag_cost + usize::from(pattern[i - 1] != tc);
            let del = cost[i - 1] + 1; // skip a pattern char
            let ins = up_cost + 1; // skip a text char

            // Prefer the diagonal, then whichever keeps the earlier start.
            let (mut c, mut s) = (sub, diag_start);
            if del < c || (del == c && start[i - 1] < s) {
                c = del;
                s = start[i - 1];
            }
            if ins < c || (ins == c && up_start < s) {
                c = ins;
                s = up_start;
            }

            diag_cost = up_cost;
            diag_start = up_start;
            cost[i] = c;
            start[i] = s;
        }

        let candidate = SubstringMatch {
            errors: cost[m],
            start: start[m],
        };
        if candidate.errors < best.errors
            || (candidate.errors == best.errors && closer(candidate, best, location))
        {
            best = candidate;
        }

        if best.errors == 0 && best.start == location {
            break;
        }
    }

    Some(best)
}

fn closer(a: SubstringMatch, b: SubstringMatch, location: usize) -> bool {
    let (da, db) = (a.start.abs_diff(location), b.start.abs_diff(location));
    da < db || (da == db && a.start < b.start)
}

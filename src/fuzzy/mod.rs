// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Queries are matched as approximate substrings of each field, so a partial
//! word or a word with a typo still lands.

mod levenshtein;

pub use levenshtein::*;

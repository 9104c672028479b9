// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query state: the current query plus memoized results.
//!
//! Two states, driven by every `set_query`:
//!
//! ```text
//!            set_query(non-blank)
//!   ┌──────┐ ───────────────────▶ ┌───────────┐
//!   │ Idle │                      │ Searching │
//!   └──────┘ ◀─────────────────── └───────────┘
//!              set_query(blank)
//! ```
//!
//! The dropdown view (`results`) and the full view (`all_results`) are slices
//! of the same computation, so they can only differ in length.

use super::Matcher;
use crate::types::{MatchResult, SearchIndex};
use std::cell::OnceCell;

/// Maximum results shown in the inline dropdown.
pub const DROPDOWN_LIMIT: usize = 8;

/// Whether a query is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
}

/// Holds one session's query against a borrowed index.
///
/// Results are computed lazily on first read after a query change and reused
/// until the query changes again.
#[derive(Debug)]
pub struct QueryState<'a> {
    index: &'a SearchIndex,
    matcher: &'a Matcher,
    query: String,
    results: OnceCell<Vec<MatchResult>>,
}

impl<'a> QueryState<'a> {
    pub fn new(index: &'a SearchIndex, matcher: &'a Matcher) -> Self {
        Self {
            index,
            matcher,
            query: String::new(),
            results: OnceCell::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query. Setting the same text again keeps the cached results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.results = OnceCell::new();
        }
    }

    /// True iff the trimmed query is non-empty.
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn state(&self) -> SearchState {
        if self.is_searching() {
            SearchState::Searching
        } else {
            SearchState::Idle
        }
    }

    /// Every match, best first.
    pub fn all_results(&self) -> &[MatchResult] {
        self.results
            .get_or_init(|| self.matcher.search(&self.query, self.index))
    }

    /// The first [`DROPDOWN_LIMIT`] matches.
    pub fn results(&self) -> &[MatchResult] {
        let all = self.all_results();
        &all[..all.len().min(DROPDOWN_LIMIT)]
    }

    /// Has the current query already been computed?
    pub fn is_computed(&self) -> bool {
        self.results.get().is_some()
    }
}

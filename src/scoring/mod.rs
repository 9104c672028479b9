// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! Field weight decides influence: a title hit moves a record further up than
//! the same hit in tags, which moves it further than one in the description.

mod core;
pub mod ranking;

pub use core::*;

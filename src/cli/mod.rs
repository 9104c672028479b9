// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `index` builds an index from a content directory,
//! `search` queries one, and `inspect` shows what an index holds.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Weighted fuzzy search over blog posts and case studies",
    version
)]
pub struct Cli {
    /// Log debug output (overrides FOLIO_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a content directory
    Index {
        /// Content directory containing manifest.json and document files
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the index JSON
        #[arg(short, long, default_value = "search-index.json")]
        output: PathBuf,
    },

    /// Search an index and display results
    Search {
        /// Path to the index JSON
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the dropdown size)
        #[arg(short, long, conflicts_with = "all")]
        limit: Option<usize>,

        /// Show every result, as the results page does
        #[arg(long)]
        all: bool,

        /// Override the match threshold (0 = exact, 1 = anything)
        #[arg(long)]
        threshold: Option<f64>,

        /// Ignore where in a field the match occurs
        #[arg(long)]
        ignore_location: bool,

        /// Matcher configuration JSON
        #[arg(long, env = "FOLIO_CONFIG")]
        config: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect an index file
    Inspect {
        /// Path to the index JSON
        file: PathBuf,
    },
}

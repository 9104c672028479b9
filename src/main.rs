// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use folio_search::build::{read_index, run_build};
use folio_search::{Matcher, MatcherConfig, SearchIndex, DROPDOWN_LIMIT};

mod cli;
use cli::display::{
    close_section, line, open_section, paint, result_row, truncate, Emphasis, Role,
};
use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("folio=debug,folio_search=debug")
    } else {
        EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index { input, output } => cmd_index(&input, &output),
        Commands::Search {
            file,
            query,
            limit,
            all,
            threshold,
            ignore_location,
            config,
            json,
        } => {
            let config = matcher_config(config, threshold, ignore_location)?;
            let limit = if all { None } else { Some(limit.unwrap_or(DROPDOWN_LIMIT)) };
            cmd_search(&file, &query, &config, limit, json)
        }
        Commands::Inspect { file } => cmd_inspect(&file),
    }
}

/// Config file (if any) with CLI flags layered on top.
fn matcher_config(
    path: Option<PathBuf>,
    threshold: Option<f64>,
    ignore_location: bool,
) -> Result<MatcherConfig> {
    let mut config = match path {
        Some(path) => MatcherConfig::from_file(&path)?,
        None => MatcherConfig::default(),
    };
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    if ignore_location {
        config.ignore_location = true;
    }
    Ok(config)
}

fn cmd_index(input: &Path, output: &Path) -> Result<()> {
    let summary = run_build(input, output)
        .with_context(|| format!("building index from {}", input.display()))?;

    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} records │ {} excluded │ {} filtered out │ {}",
        summary.records,
        summary.excluded,
        summary.filtered_out,
        output.display()
    );
    Ok(())
}

fn load(file: &Path) -> Result<SearchIndex> {
    read_index(file).with_context(|| format!("loading index {}", file.display()))
}

fn cmd_search(
    file: &Path,
    query: &str,
    config: &MatcherConfig,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let index = load(file)?;
    let matcher = Matcher::new(config.clone()).context("invalid matcher configuration")?;
    let results = matcher.search(query, &index);
    let total = results.len();
    let shown = &results[..limit.map_or(total, |l| l.min(total))];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    open_section(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if shown.is_empty() {
        line(&paint(Role::Muted, Emphasis::Dim, "  no matches"));
    }
    for (i, result) in shown.iter().enumerate() {
        line(&result_row(i + 1, result));
    }
    close_section();
    println!(
        "{}",
        paint(
            Role::Muted,
            Emphasis::Dim,
            &format!("  {} of {} matches in {} records", shown.len(), total, index.len())
        )
    );
    Ok(())
}

fn cmd_inspect(file: &Path) -> Result<()> {
    let index = load(file)?;

    open_section("INDEX");
    line(&format!("  version  {}", index.version));
    line(&format!(
        "  records  {}",
        paint(Role::Good, Emphasis::Bold, &index.len().to_string())
    ));
    line(&format!(
        "  excluded {}",
        paint(Role::Fair, Emphasis::Bold, &index.exclusions().len().to_string())
    ));
    close_section();

    if !index.is_empty() {
        open_section("RECORDS");
        for record in index.records() {
            let tags = record
                .tags
                .as_ref()
                .map(|t| format!(" [{}]", t.join(", ")))
                .unwrap_or_default();
            line(&format!(
                "  {} {}",
                truncate(&record.title, 36),
                paint(
                    Role::Muted,
                    Emphasis::Dim,
                    &truncate(&format!("{}{}", record.url, tags), 38)
                )
            ));
        }
        close_section();
    }

    if !index.exclusions().is_empty() {
        open_section("EXCLUDED");
        for exclusion in index.exclusions() {
            let source = exclusion.document.as_deref().unwrap_or(&exclusion.slug);
            line(&format!(
                "  #{:<4} {:<30} {}",
                exclusion.position,
                truncate(source, 30),
                paint(Role::Fair, Emphasis::Plain, &exclusion.reason.to_string())
            ));
        }
        close_section();
    }
    Ok(())
}

//! The file-based content layer and the `folio index` build.
//!
//! A content directory holds a `manifest.json` plus one JSON document per
//! blog post or case study. Loading turns them into [`ContentItem`]s; the
//! build then filters them, runs the index builder, reports exclusions, and
//! writes the index as JSON.

pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::index::build_index;
use crate::types::SearchIndex;

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// Errors from reading content or writing an index.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("unsupported manifest version {0}")]
    ManifestVersion(u32),
    #[error("invalid include filter \"{0}\": expected \"*\" or a field object")]
    InvalidInclude(String),
}

/// Highest manifest version this loader understands.
pub const MANIFEST_VERSION: u32 = 1;

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub loaded: usize,
    pub filtered_out: usize,
    pub records: usize,
    pub excluded: usize,
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Read and parse `manifest.json` from a content directory.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest, ContentError> {
    let manifest_path = input_dir.join("manifest.json");
    let display = manifest_path.display().to_string();
    let raw = fs::read_to_string(&manifest_path).map_err(|source| ContentError::Read {
        path: display.clone(),
        source,
    })?;
    let manifest: InputManifest = serde_json::from_str(&raw).map_err(|source| {
        ContentError::Parse {
            path: display,
            source,
        }
    })?;
    if manifest.version > MANIFEST_VERSION {
        return Err(ContentError::ManifestVersion(manifest.version));
    }
    manifest.filter()?;
    Ok(manifest)
}

/// Load every content item a directory's manifest lists, in manifest order,
/// with the manifest's include filter applied.
pub fn load_content(input_dir: &Path) -> Result<Vec<ContentItem>, ContentError> {
    let manifest = read_manifest(input_dir)?;
    let items = load_documents(input_dir, &manifest)?;
    let (_, items) = apply_filter(items, &manifest.filter()?);
    Ok(items)
}

/// Items the filter keeps, paired with their manifest positions.
fn apply_filter(
    items: Vec<ContentItem>,
    filter: &IncludeFilter,
) -> (Vec<usize>, Vec<ContentItem>) {
    items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .unzip()
}

/// Write an index as pretty-printed JSON.
pub fn write_index(index: &SearchIndex, output: &Path) -> Result<(), ContentError> {
    let display = output.display().to_string();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ContentError::Write {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(index).map_err(ContentError::Serialize)?;
    fs::write(output, json).map_err(|source| ContentError::Write {
        path: display,
        source,
    })
}

/// Read an index previously written by [`write_index`].
pub fn read_index(path: &Path) -> Result<SearchIndex, ContentError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: display,
        source,
    })
}

/// Load content from `input_dir`, build the index, and write it to `output`.
pub fn run_build(input_dir: &Path, output: &Path) -> Result<BuildSummary, ContentError> {
    let manifest = read_manifest(input_dir)?;

    #[cfg(feature = "parallel")]
    let items = {
        let load_pb = ProgressBar::new(manifest.documents.len() as u64);
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
        let items = load_documents_with_progress(input_dir, &manifest, &load_pb)?;
        load_pb.finish_with_message(format!("loaded {} documents", items.len()));
        items
    };
    #[cfg(not(feature = "parallel"))]
    let items = load_documents_with_progress(input_dir, &manifest)?;

    let loaded = items.len();
    let (positions, items) = apply_filter(items, &manifest.filter()?);
    let filtered_out = loaded - items.len();

    // Exclusions come back relative to the filtered items; point them at the manifest
    let mut index = build_index(&items);
    index.update_exclusions(|exclusion| {
        if let Some(&position) = positions.get(exclusion.position) {
            exclusion.position = position;
            exclusion.document = manifest.documents.get(position).cloned();
        }
    });
    for exclusion in index.exclusions() {
        tracing::warn!(
            position = exclusion.position,
            document = exclusion.document.as_deref().unwrap_or(""),
            slug = %exclusion.slug,
            reason = %exclusion.reason,
            "content item excluded from index"
        );
    }

    write_index(&index, output)?;
    tracing::info!(
        output = %output.display(),
        records = index.len(),
        "wrote search index"
    );

    Ok(BuildSummary {
        loaded,
        filtered_out,
        records: index.len(),
        excluded: index.exclusions().len(),
    })
}

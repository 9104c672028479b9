//! Content document loading, parallel when the `parallel` feature is on.
//!
//! Either way the returned items are in manifest order: rayon's indexed
//! `collect` preserves the order of the source slice.

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ContentError, ContentItem, InputManifest};

/// Read and parse one document file.
fn load_document(input_dir: &Path, filename: &str) -> Result<ContentItem, ContentError> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| ContentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str::<ContentItem>(&content).map_err(|source| ContentError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load all documents sequentially.
pub fn load_documents(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<ContentItem>, ContentError> {
    manifest
        .documents
        .iter()
        .map(|filename| load_document(input_dir, filename))
        .collect()
}

/// Load all documents in parallel, reporting progress.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<ContentItem>, ContentError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    manifest
        .documents
        .par_iter()
        .map(|filename| {
            let item = load_document(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(10) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(item)
        })
        .collect()
}

/// Non-parallel fallback.
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<ContentItem>, ContentError> {
    load_documents(input_dir, manifest)
}

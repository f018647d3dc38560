//! Catalog file loading.
//!
//! # Responsibility
//! - Read the species JSON file shipped with the nursery deployment.
//! - Locate that file relative to a content root.
//!
//! # Invariants
//! - A missing catalog file is not an error: it yields an empty index and
//!   a warning, so lookups report not-found instead of failing startup.
//! - An unreadable or invalid file is an error; partial loads never happen.

use super::index::CatalogIndex;
use super::{CatalogError, CatalogResult};
use crate::model::species::Species;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

const CATALOG_FILE_NAME: &str = "plants-types.json";
const CATALOG_DATA_DIR: &str = "Data";

/// Parses catalog JSON (an array of species records).
pub fn parse_catalog_json(text: &str) -> CatalogResult<Vec<Species>> {
    Ok(serde_json::from_str(text)?)
}

/// Builds an index from catalog JSON text.
pub fn load_catalog_json(text: &str) -> CatalogResult<CatalogIndex> {
    parse_catalog_json(text).map(CatalogIndex::load)
}

/// Reads and indexes a catalog file.
///
/// # Errors
/// - `CatalogError::Io` when the file cannot be read.
/// - `CatalogError::Json` when its content is not a species array.
pub fn load_catalog_file(path: impl AsRef<Path>) -> CatalogResult<CatalogIndex> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|text| load_catalog_json(&text));

    match &result {
        Ok(index) => info!(
            "event=catalog_file_load module=catalog status=ok path={} species={} duration_ms={}",
            path.display(),
            index.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=catalog_file_load module=catalog status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Locates the catalog file under `content_root`.
///
/// Looks in `<root>/Data/` first, then two levels above the root. Returns
/// `None` when neither exists.
pub fn resolve_catalog_path(content_root: impl AsRef<Path>) -> Option<PathBuf> {
    candidate_paths(content_root.as_ref())
        .into_iter()
        .find(|candidate| candidate.is_file())
}

/// Loads the catalog found under `content_root`, or an empty index when
/// no catalog file exists.
pub fn load_catalog_from_content_root(
    content_root: impl AsRef<Path>,
) -> CatalogResult<CatalogIndex> {
    let content_root = content_root.as_ref();
    match resolve_catalog_path(content_root) {
        Some(path) => load_catalog_file(path),
        None => {
            warn!(
                "event=catalog_file_load module=catalog status=missing content_root={}",
                content_root.display()
            );
            Ok(CatalogIndex::default())
        }
    }
}

fn candidate_paths(content_root: &Path) -> [PathBuf; 2] {
    [
        content_root.join(CATALOG_DATA_DIR).join(CATALOG_FILE_NAME),
        content_root.join("..").join("..").join(CATALOG_FILE_NAME),
    ]
}

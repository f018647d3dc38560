//! Species catalog: loading and lookup.
//!
//! # Responsibility
//! - Turn externally supplied species records into a queryable index.
//! - Keep file discovery and JSON decoding out of lookup code.
//!
//! # Invariants
//! - There is no global catalog; the index is an explicit value passed to
//!   resolver and service calls.

pub mod index;
pub mod source;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading error.
#[derive(Debug)]
pub enum CatalogError {
    /// Caller required a non-empty catalog and got none.
    Empty,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "species catalog is empty"),
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid catalog JSON: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

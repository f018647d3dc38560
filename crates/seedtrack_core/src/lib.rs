//! Core domain logic for seed-batch identity tracking.
//! This crate is the single source of truth for label, catalog and
//! resolution invariants.

pub mod catalog;
pub mod codec;
pub mod logging;
pub mod model;
pub mod product;
pub mod resolve;
pub mod service;

pub use catalog::index::CatalogIndex;
pub use catalog::source::{
    load_catalog_file, load_catalog_from_content_root, load_catalog_json, parse_catalog_json,
    resolve_catalog_path,
};
pub use catalog::{CatalogError, CatalogResult};
pub use codec::identity::{
    decode, encode, parse_general_date, DecodedToken, IdentityToken, MalformedToken,
    UnencodableDate,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::seeding::{ScannedPlant, SeedingEntry};
pub use model::species::{short_id, Locale, Species, SpeciesId, SHORT_ID_LEN};
pub use product::code::ProductCode;
pub use resolve::resolver::{lookup_species, resolve, Resolution, SpeciesDisplay, UNKNOWN_SPECIES};
pub use service::scan_service::{OrderScanSession, ScanRejected};
pub use service::seeding_service::{
    sorted_by_sowing_date, SeedingError, SeedingImport, SeedingRow, SeedingService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Seeding use-case service.
//!
//! # Responsibility
//! - Register sown batches against the catalog.
//! - Map tabular seeding rows (already read by an external spreadsheet
//!   reader) onto batch entries.
//!
//! # Invariants
//! - A registered batch always references an existing species.
//! - Row import never fails as a whole: unusable rows are skipped and
//!   counted.
//! - Row species matching uses the French display names.

use crate::catalog::index::CatalogIndex;
use crate::codec::identity::{encode, parse_general_date};
use crate::model::seeding::SeedingEntry;
use crate::model::species::{Locale, SpeciesId};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const IMPORT_LOCALE: Locale = Locale::Fr;

/// Service error for batch registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedingError {
    UnknownSpecies(SpeciesId),
    ZeroQuantity,
    /// Sowing year cannot be printed on a label.
    UnencodableDate(NaiveDate),
}

impl Display for SeedingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSpecies(id) => write!(f, "species not in catalog: {id}"),
            Self::ZeroQuantity => write!(f, "seeding quantity must be at least 1"),
            Self::UnencodableDate(date) => {
                write!(f, "sowing date {date} cannot be encoded on a label")
            }
        }
    }
}

impl Error for SeedingError {}

/// One raw row of a seeding sheet: date, plant name, quantity, notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedingRow {
    pub date: Option<String>,
    pub plant_name: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

/// Import envelope returned by [`SeedingService::import_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedingImport {
    pub entries: Vec<SeedingEntry>,
    pub skipped_rows: usize,
}

/// Batch registration over a loaded catalog.
pub struct SeedingService<'a> {
    catalog: &'a CatalogIndex,
}

impl<'a> SeedingService<'a> {
    pub fn new(catalog: &'a CatalogIndex) -> Self {
        Self { catalog }
    }

    /// Registers a new batch.
    ///
    /// # Errors
    /// - `UnknownSpecies` when `species_id` is not in the catalog.
    /// - `ZeroQuantity` when `quantity == 0`.
    /// - `UnencodableDate` when the year is outside 0000-9999.
    pub fn register(
        &self,
        sowing_date: NaiveDate,
        species_id: SpeciesId,
        quantity: u32,
        notes: Option<String>,
    ) -> Result<SeedingEntry, SeedingError> {
        if quantity == 0 {
            return Err(SeedingError::ZeroQuantity);
        }
        if self.catalog.by_id(&species_id).is_none() {
            return Err(SeedingError::UnknownSpecies(species_id));
        }
        encode(sowing_date, &species_id)
            .map_err(|err| SeedingError::UnencodableDate(err.0))?;
        Ok(SeedingEntry::new(sowing_date, species_id, quantity, notes))
    }

    /// Builds entries from sheet rows, skipping rows that cannot be used.
    ///
    /// A row is skipped when its date or plant name is blank, when the
    /// date or quantity does not parse, when the quantity is zero, or when
    /// no species matches the name.
    /// The first French-name search hit is taken as the species.
    pub fn import_rows(&self, rows: &[SeedingRow]) -> SeedingImport {
        let entries = rows
            .iter()
            .filter_map(|row| self.entry_from_row(row))
            .collect::<Vec<_>>();
        let skipped_rows = rows.len() - entries.len();

        info!(
            "event=seeding_import module=service status=ok rows={} imported={} skipped={}",
            rows.len(),
            entries.len(),
            skipped_rows
        );

        SeedingImport {
            entries,
            skipped_rows,
        }
    }

    fn entry_from_row(&self, row: &SeedingRow) -> Option<SeedingEntry> {
        let date = non_blank(row.date.as_deref())?;
        let plant_name = non_blank(row.plant_name.as_deref())?;
        let sowing_date = parse_general_date(date)?;
        let quantity = row
            .quantity
            .as_deref()?
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)?;
        let species = self
            .catalog
            .search(plant_name, IMPORT_LOCALE)
            .into_iter()
            .next()?;

        Some(SeedingEntry::new(
            sowing_date,
            species.id,
            quantity,
            row.notes.clone(),
        ))
    }
}

/// Returns entries ordered by sowing date, oldest first.
///
/// Entries sown the same day keep their relative order.
pub fn sorted_by_sowing_date(entries: &[SeedingEntry]) -> Vec<&SeedingEntry> {
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|entry| entry.sowing_date);
    sorted
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

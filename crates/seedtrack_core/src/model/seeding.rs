//! Sown batch and scan records.
//!
//! # Invariants
//! - A batch's label token is derived from `sowing_date` + `species_id`
//!   and is never stored separately.
//! - Batches built through `SeedingService` always have an encodable date.
//! - `quantity` of a registered batch is at least 1.

use crate::codec::identity::{encode, IdentityToken, UnencodableDate};
use crate::model::species::SpeciesId;
use crate::resolve::resolver::SpeciesDisplay;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One sown batch of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedingEntry {
    pub id: Uuid,
    pub sowing_date: NaiveDate,
    pub species_id: SpeciesId,
    pub quantity: u32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SeedingEntry {
    /// Creates an entry with a fresh id, stamped with the current time.
    pub fn new(
        sowing_date: NaiveDate,
        species_id: SpeciesId,
        quantity: u32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sowing_date,
            species_id,
            quantity,
            notes,
            created_at: Utc::now(),
        }
    }

    /// Label text printed as the batch QR code.
    pub fn identity_token(&self) -> Result<IdentityToken, UnencodableDate> {
        encode(self.sowing_date, &self.species_id)
    }

    /// Extended label payload: `PLANT:<id>|QTY:<n>|DATE:<YYYY-MM-DD>`.
    pub fn label_payload(&self) -> String {
        format!(
            "PLANT:{}|QTY:{}|DATE:{}",
            self.species_id.hyphenated(),
            self.quantity,
            self.sowing_date.format("%Y-%m-%d")
        )
    }
}

/// One accepted scan within an order scanning session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedPlant {
    /// 1-based position within the session.
    pub scan_number: u32,
    pub sowing_date: NaiveDate,
    pub species_id: SpeciesId,
    pub species: SpeciesDisplay,
    pub quantity: u32,
    pub scanned_at: DateTime<Utc>,
}

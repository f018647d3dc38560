//! Order scanning session.
//!
//! # Responsibility
//! - Collect resolved plant scans for one manufacturing order kit.
//! - Track progress against the kit quantity carried by its product code.
//!
//! # Invariants
//! - Scan numbers are 1-based and contiguous.
//! - A rejected scan leaves the session unchanged.
//! - The session never holds more scans than `product.total_quantity`.

use crate::catalog::index::CatalogIndex;
use crate::model::seeding::ScannedPlant;
use crate::model::species::Locale;
use crate::product::code::ProductCode;
use crate::resolve::resolver::{resolve, Resolution, SpeciesDisplay};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a scan was not added to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRejected {
    /// Token was malformed or names no catalog species.
    NotFound(String),
    /// Kit already has all its plants.
    QuotaReached { expected: u32 },
}

impl Display for ScanRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(token) => write!(f, "no species found for scan `{token}`"),
            Self::QuotaReached { expected } => {
                write!(f, "kit is complete: all {expected} plants already scanned")
            }
        }
    }
}

impl Error for ScanRejected {}

/// Scans collected for one product kit.
#[derive(Debug, Clone)]
pub struct OrderScanSession {
    product: ProductCode,
    locale: Locale,
    scans: Vec<ScannedPlant>,
}

impl OrderScanSession {
    pub fn new(product: ProductCode, locale: Locale) -> Self {
        Self {
            product,
            locale,
            scans: Vec::new(),
        }
    }

    pub fn product(&self) -> &ProductCode {
        &self.product
    }

    pub fn scans(&self) -> &[ScannedPlant] {
        &self.scans
    }

    /// Plants still expected before the kit is complete.
    pub fn remaining(&self) -> u32 {
        self.product
            .total_quantity
            .saturating_sub(self.scanned_count())
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Records a scan stamped with the current time.
    pub fn scan(
        &mut self,
        token: &str,
        catalog: &CatalogIndex,
    ) -> Result<&ScannedPlant, ScanRejected> {
        self.scan_at(token, catalog, Utc::now())
    }

    /// Records a scan with an explicit timestamp.
    ///
    /// # Errors
    /// - `QuotaReached` when the kit is already complete.
    /// - `NotFound` when the token does not resolve to a catalog species.
    pub fn scan_at(
        &mut self,
        token: &str,
        catalog: &CatalogIndex,
        scanned_at: DateTime<Utc>,
    ) -> Result<&ScannedPlant, ScanRejected> {
        if self.is_complete() {
            return Err(ScanRejected::QuotaReached {
                expected: self.product.total_quantity,
            });
        }

        let Resolution::Resolved {
            species,
            sowing_date,
        } = resolve(token, catalog, self.locale)
        else {
            warn!(
                "event=scan_session module=service status=rejected product={} reason=not_found",
                self.product
            );
            return Err(ScanRejected::NotFound(token.to_string()));
        };

        let scan_number = self.scanned_count() + 1;
        self.scans.push(ScannedPlant {
            scan_number,
            sowing_date,
            species_id: species.id,
            species: SpeciesDisplay::of(species, self.locale),
            quantity: 1,
            scanned_at,
        });
        info!(
            "event=scan_session module=service status=ok product={} scan_number={} remaining={}",
            self.product,
            scan_number,
            self.remaining()
        );

        Ok(&self.scans[self.scans.len() - 1])
    }

    fn scanned_count(&self) -> u32 {
        u32::try_from(self.scans.len()).unwrap_or(u32::MAX)
    }
}

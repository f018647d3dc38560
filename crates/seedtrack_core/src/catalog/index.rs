//! In-memory species catalog index.
//!
//! # Responsibility
//! - Hold the species list loaded once at startup.
//! - Serve exact-id, short-id-prefix and substring lookups.
//!
//! # Invariants
//! - The index is immutable after `load`; callers share it by reference.
//! - Catalog order is load order, and every multi-candidate lookup
//!   resolves to the first-loaded candidate.
//! - An empty index is valid; every lookup on it returns nothing.

use super::CatalogError;
use crate::model::species::{Locale, Species, SpeciesId};
use log::info;
use std::collections::HashMap;

/// Load-once, read-many species catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    species: Vec<Species>,
    /// Canonical lowercase id text, parallel to `species`.
    id_texts: Vec<String>,
    by_id: HashMap<SpeciesId, usize>,
}

impl CatalogIndex {
    /// Builds the index from records in catalog order.
    ///
    /// Duplicate ids keep the first-loaded record for `by_id`.
    pub fn load(records: impl IntoIterator<Item = Species>) -> Self {
        let species = records.into_iter().collect::<Vec<_>>();
        let id_texts = species.iter().map(Species::id_text).collect::<Vec<_>>();

        let mut by_id = HashMap::with_capacity(species.len());
        for (position, record) in species.iter().enumerate() {
            by_id.entry(record.id).or_insert(position);
        }

        info!(
            "event=catalog_load module=catalog status=ok species={} distinct_ids={}",
            species.len(),
            by_id.len()
        );

        Self {
            species,
            id_texts,
            by_id,
        }
    }

    /// Same as [`CatalogIndex::load`], for callers that cannot run without
    /// a catalog.
    ///
    /// # Errors
    /// - Returns `CatalogError::Empty` when `records` yields nothing.
    pub fn load_non_empty(
        records: impl IntoIterator<Item = Species>,
    ) -> Result<Self, CatalogError> {
        let index = Self::load(records);
        if index.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// All species in catalog order.
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Exact id lookup.
    pub fn by_id(&self, id: &SpeciesId) -> Option<&Species> {
        self.by_id.get(id).map(|&position| &self.species[position])
    }

    /// Returns the first-loaded species whose canonical id text starts
    /// with `prefix`, ignoring case.
    ///
    /// Several species may share an 8-character prefix; load order breaks
    /// the tie. The prefix is not trimmed, and an empty prefix matches the
    /// first-loaded species. Callers resolving scans enforce the minimum
    /// fragment length before calling this.
    pub fn by_short_id(&self, prefix: &str) -> Option<&Species> {
        let prefix = prefix.to_lowercase();
        self.id_texts
            .iter()
            .position(|text| text.starts_with(prefix.as_str()))
            .map(|position| &self.species[position])
    }

    /// Case-insensitive substring search over the `locale` display name,
    /// the Latin name and the id text.
    ///
    /// Results keep catalog order; there is no ranking.
    pub fn search(&self, term: &str, locale: Locale) -> Vec<&Species> {
        let needle = term.to_lowercase();
        self.species
            .iter()
            .zip(&self.id_texts)
            .filter(|(record, id_text)| {
                record.name(locale).to_lowercase().contains(needle.as_str())
                    || record.latin_name.to_lowercase().contains(needle.as_str())
                    || id_text.contains(needle.as_str())
            })
            .map(|(record, _)| record)
            .collect()
    }
}

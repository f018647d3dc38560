//! Scanned-token resolution against the species catalog.
//!
//! # Responsibility
//! - Compose token decoding with catalog lookup.
//! - Produce display strings for resolved and unresolved scans.
//!
//! # Invariants
//! - Resolution is pure over the given catalog: same token, same result.
//! - Malformed tokens and unknown species both resolve to
//!   `Resolution::NotFound` carrying the original token; neither is an error.
//! - A fragment that parses as a full id is looked up exactly; anything
//!   else uses its first 8 characters as a short id.

use crate::catalog::index::CatalogIndex;
use crate::codec::identity::decode;
use crate::model::species::{Locale, Species, SpeciesId, SHORT_ID_LEN};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Placeholder shown for species that cannot be resolved.
pub const UNKNOWN_SPECIES: &str = "Unknown";

/// Outcome of resolving one scanned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Resolved {
        species: &'a Species,
        sowing_date: NaiveDate,
    },
    NotFound {
        token: String,
    },
}

impl<'a> Resolution<'a> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn species(&self) -> Option<&'a Species> {
        match self {
            Self::Resolved { species, .. } => Some(*species),
            Self::NotFound { .. } => None,
        }
    }

    pub fn sowing_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Resolved { sowing_date, .. } => Some(*sowing_date),
            Self::NotFound { .. } => None,
        }
    }

    /// Display strings for `locale`; all `"Unknown"` when not found.
    pub fn display(&self, locale: Locale) -> SpeciesDisplay {
        match self {
            Self::Resolved { species, .. } => SpeciesDisplay::of(species, locale),
            Self::NotFound { .. } => SpeciesDisplay::unknown(),
        }
    }
}

/// Localized name triple used on screens and scan records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDisplay {
    pub name: String,
    pub latin: String,
    /// `"<name> (<latin>)"`.
    pub full_name: String,
}

impl SpeciesDisplay {
    pub fn of(species: &Species, locale: Locale) -> Self {
        let name = species.name(locale).to_string();
        let latin = species.latin_name.clone();
        let full_name = format!("{name} ({latin})");
        Self {
            name,
            latin,
            full_name,
        }
    }

    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_SPECIES.to_string(),
            latin: UNKNOWN_SPECIES.to_string(),
            full_name: UNKNOWN_SPECIES.to_string(),
        }
    }
}

/// Resolves a scanned or typed token to a catalog species.
///
/// `locale` only affects the diagnostic log line; use
/// [`Resolution::display`] for localized names.
pub fn resolve<'a>(token: &str, catalog: &'a CatalogIndex, locale: Locale) -> Resolution<'a> {
    let decoded = match decode(token) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(
                "event=species_resolve module=resolve status=malformed locale={} error={}",
                locale, err
            );
            return Resolution::NotFound {
                token: token.to_string(),
            };
        }
    };

    match lookup_species(&decoded.species_fragment, catalog) {
        Some(species) => {
            debug!(
                "event=species_resolve module=resolve status=ok locale={} short_id={}",
                locale,
                species.short_id()
            );
            Resolution::Resolved {
                species,
                sowing_date: decoded.sowing_date,
            }
        }
        None => {
            warn!(
                "event=species_resolve module=resolve status=not_found locale={} fragment={}",
                locale, decoded.species_fragment
            );
            Resolution::NotFound {
                token: token.to_string(),
            }
        }
    }
}

/// Looks up a species by a full id text or a short-id fragment.
///
/// Fragments shorter than 8 characters that are not full ids match nothing.
pub fn lookup_species<'a>(fragment: &str, catalog: &'a CatalogIndex) -> Option<&'a Species> {
    if let Ok(id) = SpeciesId::parse_str(fragment) {
        return catalog.by_id(&id);
    }
    if fragment.chars().count() < SHORT_ID_LEN {
        return None;
    }
    let cut = fragment
        .char_indices()
        .nth(SHORT_ID_LEN)
        .map_or(fragment.len(), |(position, _)| position);
    catalog.by_short_id(&fragment[..cut])
}

#[cfg(test)]
mod tests {
    use super::lookup_species;
    use crate::catalog::index::CatalogIndex;
    use crate::model::species::Species;
    use uuid::Uuid;

    fn catalog() -> (CatalogIndex, Uuid) {
        let id = Uuid::parse_str("a1b2c3d4-1111-4222-8333-444455556666").unwrap();
        let index = CatalogIndex::load(vec![Species::new(id, "Rose", "Rose", "Rose", "Rosa")]);
        (index, id)
    }

    #[test]
    fn short_fragment_without_full_id_matches_nothing() {
        let (index, _) = catalog();
        assert!(lookup_species("a1b2c3", &index).is_none());
    }

    #[test]
    fn long_non_uuid_fragment_uses_first_eight_characters() {
        let (index, id) = catalog();
        assert_eq!(lookup_species("A1B2C3D4-zz", &index).unwrap().id, id);
    }

    #[test]
    fn full_id_in_simple_form_is_an_exact_lookup() {
        let (index, id) = catalog();
        let simple = id.simple().to_string();
        assert_eq!(lookup_species(&simple, &index).unwrap().id, id);
    }
}

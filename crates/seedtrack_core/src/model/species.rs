//! Species catalog record.
//!
//! # Responsibility
//! - Define the immutable catalog entry shared by codec, resolver and services.
//! - Map display-name lookups onto the supported locales.
//!
//! # Invariants
//! - `id` is the only identity; names are display data and may repeat.
//! - Records are never mutated after catalog load.
//! - The short id is always the first 8 characters of the canonical
//!   (lowercase, hyphenated) id text.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable 128-bit identifier of a species.
pub type SpeciesId = Uuid;

/// Number of leading id characters printed on labels.
pub const SHORT_ID_LEN: usize = 8;

/// Display locale for species names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    Fr,
    #[default]
    En,
    De,
}

impl Locale {
    /// Parses a locale code leniently.
    ///
    /// Matching is case-insensitive; anything that is not `FR` or `DE`
    /// falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "FR" => Self::Fr,
            "DE" => Self::De,
            _ => Self::En,
        }
    }

    /// Uppercase two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::En => "EN",
            Self::De => "DE",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One plant kind in the catalog.
///
/// Serialized with the catalog file's field names (`Id`, `NameFr`, ...).
/// Catalogs written with camelCase or snake_case keys also load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Species {
    #[serde(alias = "id")]
    pub id: SpeciesId,
    #[serde(default, alias = "nameFr", alias = "name_fr")]
    pub name_fr: String,
    #[serde(default, alias = "nameEn", alias = "name_en")]
    pub name_en: String,
    #[serde(default, alias = "nameDe", alias = "name_de")]
    pub name_de: String,
    #[serde(default, alias = "latinName", alias = "latin_name")]
    pub latin_name: String,
}

impl Species {
    pub fn new(
        id: SpeciesId,
        name_fr: impl Into<String>,
        name_en: impl Into<String>,
        name_de: impl Into<String>,
        latin_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name_fr: name_fr.into(),
            name_en: name_en.into(),
            name_de: name_de.into(),
            latin_name: latin_name.into(),
        }
    }

    /// Display name for `locale`.
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.name_fr,
            Locale::En => &self.name_en,
            Locale::De => &self.name_de,
        }
    }

    /// Canonical id text (lowercase, hyphenated).
    pub fn id_text(&self) -> String {
        self.id.hyphenated().to_string()
    }

    /// First [`SHORT_ID_LEN`] characters of the canonical id text.
    pub fn short_id(&self) -> String {
        short_id(&self.id)
    }
}

/// First [`SHORT_ID_LEN`] characters of the canonical text form of `id`.
///
/// This truncation is what labels carry; the full id cannot be recovered
/// from it.
pub fn short_id(id: &SpeciesId) -> String {
    let mut text = id.hyphenated().to_string();
    text.truncate(SHORT_ID_LEN);
    text
}

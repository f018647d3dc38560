//! Identity token codec for printed seed-batch labels.
//!
//! # Responsibility
//! - Encode a (sowing date, species id) pair into the label text.
//! - Decode scanned label text back into a date and an id fragment.
//!
//! # Invariants
//! - Wire grammar: `S<YYYY-MM-DD>_<fragment>`; encode always emits the
//!   8-character short id as fragment.
//! - `decode(encode(date, id))` yields `(date, short_id(id))` for every
//!   date `encode` accepts; only four-digit years (0000-9999) are encodable.
//! - Decode never panics; every structural violation is a `MalformedToken`.
//! - The marker is case-sensitive and the fragment must hold at least
//!   8 characters.

use crate::model::species::{short_id, SpeciesId, SHORT_ID_LEN};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Leading marker of every identity token.
pub const TOKEN_MARKER: char = 'S';
/// Separator between the date and the species fragment.
pub const TOKEN_DELIMITER: char = '_';

const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";
const MIN_ENCODABLE_YEAR: i32 = 0;
const MAX_ENCODABLE_YEAR: i32 = 9999;
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

static YEAR_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})$").expect("valid year-first date regex")
});
static DAY_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})[-/.](\d{1,2})[-/.](\d{4})$").expect("valid day-first date regex")
});

/// Printable token text produced by [`encode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for IdentityToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentityToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Successfully decoded token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub sowing_date: NaiveDate,
    /// Full id text or a short-id prefix, exactly as scanned.
    pub species_fragment: String,
}

/// Structural violation of the token grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedToken {
    Empty,
    MissingMarker,
    /// Body did not split into exactly two parts on `_`.
    DelimiterCount { parts: usize },
    InvalidDate(String),
    FragmentTooShort { fragment: String },
}

impl Display for MalformedToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "token is empty"),
            Self::MissingMarker => write!(f, "token does not start with `{TOKEN_MARKER}`"),
            Self::DelimiterCount { parts } => write!(
                f,
                "token must have exactly 2 parts separated by `{TOKEN_DELIMITER}`, found {parts}"
            ),
            Self::InvalidDate(value) => write!(f, "unparsable sowing date `{value}`"),
            Self::FragmentTooShort { fragment } => write!(
                f,
                "species fragment `{fragment}` is shorter than {SHORT_ID_LEN} characters"
            ),
        }
    }
}

impl Error for MalformedToken {}

/// Sowing date that cannot be written in the token grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnencodableDate(pub NaiveDate);

impl Display for UnencodableDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sowing date {} is outside the year range {MIN_ENCODABLE_YEAR}-{MAX_ENCODABLE_YEAR}",
            self.0
        )
    }
}

impl Error for UnencodableDate {}

/// Encodes a sowing date and species id into label text.
///
/// The id is always truncated to its short form.
///
/// # Errors
/// - `UnencodableDate` when the year does not fit in four digits.
pub fn encode(
    sowing_date: NaiveDate,
    species_id: &SpeciesId,
) -> Result<IdentityToken, UnencodableDate> {
    if !(MIN_ENCODABLE_YEAR..=MAX_ENCODABLE_YEAR).contains(&sowing_date.year()) {
        return Err(UnencodableDate(sowing_date));
    }
    Ok(IdentityToken(format!(
        "{TOKEN_MARKER}{}{TOKEN_DELIMITER}{}",
        sowing_date.format(CANONICAL_DATE_FORMAT),
        short_id(species_id)
    )))
}

/// Decodes scanned label text.
///
/// Accepts the canonical `YYYY-MM-DD` date, a few general date spellings,
/// and the legacy `YY-MM-DD` form (two-digit years are read as 20xx).
///
/// # Errors
/// - Returns `MalformedToken` for any structural violation; never panics.
pub fn decode(token: &str) -> Result<DecodedToken, MalformedToken> {
    if token.is_empty() {
        return Err(MalformedToken::Empty);
    }
    let body = token
        .strip_prefix(TOKEN_MARKER)
        .ok_or(MalformedToken::MissingMarker)?;

    let parts = body.split(TOKEN_DELIMITER).collect::<Vec<_>>();
    let [date_part, fragment] = parts.as_slice() else {
        return Err(MalformedToken::DelimiterCount { parts: parts.len() });
    };

    let date_text = date_part.trim();
    let sowing_date = parse_general_date(date_text)
        .or_else(|| parse_legacy_date(date_text))
        .ok_or_else(|| MalformedToken::InvalidDate((*date_part).to_string()))?;

    if fragment.chars().count() < SHORT_ID_LEN {
        return Err(MalformedToken::FragmentTooShort {
            fragment: (*fragment).to_string(),
        });
    }

    Ok(DecodedToken {
        sowing_date,
        species_fragment: (*fragment).to_string(),
    })
}

/// Parses a date written with a four-digit year.
///
/// Year-first and day-first (nursery locale) orders are accepted with `-`,
/// `/` or `.` separators, as are ISO date-times whose time part is dropped.
pub fn parse_general_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Some(caps) = YEAR_FIRST_RE.captures(value) {
        return ymd_from_captures(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = DAY_FIRST_RE.captures(value) {
        return ymd_from_captures(&caps[3], &caps[2], &caps[1]);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

fn parse_legacy_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 8 || bytes[2] != b'-' || bytes[5] != b'-' {
        return None;
    }
    parse_general_date(&format!("20{value}"))
}

fn ymd_from_captures(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

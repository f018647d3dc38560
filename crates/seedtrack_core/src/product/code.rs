//! Structured product code (SKU) parsing.
//!
//! # Invariants
//! - Grammar: `<prefix>-<KITTYPE>-<NNN>`; the whole input must match.
//! - `full_code` is the input text, unchanged.
//! - No semantic checks: an unknown prefix still parses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static PRODUCT_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w+)-([A-Z0-9]+)-(\d{3})$").expect("valid product code regex")
});

/// Parsed product code, e.g. `508002-MIX1-012`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCode {
    pub prefix: String,
    pub kit_type: String,
    /// Value of the three-digit quantity field; leading zeros are dropped.
    pub total_quantity: u32,
    pub full_code: String,
}

impl ProductCode {
    /// Parses `code`; returns `None` when it does not match the grammar.
    pub fn parse(code: &str) -> Option<Self> {
        let caps = PRODUCT_CODE_RE.captures(code)?;
        Some(Self {
            prefix: caps[1].to_string(),
            kit_type: caps[2].to_string(),
            total_quantity: caps[3].parse().ok()?,
            full_code: code.to_string(),
        })
    }
}

impl Display for ProductCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_code)
    }
}

#[cfg(test)]
mod tests {
    use super::ProductCode;

    #[test]
    fn quantity_keeps_value_not_padding() {
        let code = ProductCode::parse("A-B-007").unwrap();
        assert_eq!(code.total_quantity, 7);
        assert_eq!(code.to_string(), "A-B-007");
    }

    #[test]
    fn lowercase_kit_type_is_rejected() {
        assert_eq!(ProductCode::parse("508002-mix1-012"), None);
    }
}

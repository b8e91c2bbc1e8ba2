use std::fmt;

/// A canonical country identifier: three characters, uppercased.
///
/// Mostly ISO 3166-1 alpha-3, plus a few project pseudo-codes for disputed
/// territories (e.g. `XKX` for Kosovo). Codes are derived from boundary
/// feature properties and never stored on the features themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

/// Placeholder some boundary datasets use for "no code assigned".
const NO_CODE_SENTINEL: &str = "-99";

impl CountryCode {
    /// Validates a raw property value as a country code.
    ///
    /// Accepts exactly three characters that are not the `-99` sentinel and
    /// do not start with `-`; the result is uppercased. Anything else yields
    /// `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() != 3 {
            return None;
        }
        if trimmed == NO_CODE_SENTINEL || trimmed.starts_with('-') {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

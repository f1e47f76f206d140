//! Country-specific postal code patterns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Countries with a known postal-code format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Ch,
    Fr,
    De,
    Nl,
    Us,
}

impl Country {
    /// Parse a lowercase two-letter country code.
    ///
    /// Unknown codes return `None`; the caller keeps whatever pattern is
    /// already in place.
    ///
    /// # Examples
    /// ```
    /// use fieldcheck_rules::Country;
    /// assert_eq!(Country::parse("de"), Some(Country::De));
    /// assert_eq!(Country::parse("xx"), None);
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ch" => Some(Country::Ch),
            "fr" => Some(Country::Fr),
            "de" => Some(Country::De),
            "nl" => Some(Country::Nl),
            "us" => Some(Country::Us),
            _ => None,
        }
    }

    /// Anchored pattern for the postal field's `pattern` attribute.
    pub fn postal_pattern(&self) -> &'static str {
        match self {
            Country::Ch => r"^[1-9]\d{3}$",
            Country::Fr => r"^(?:0[1-9]|[1-8]\d|9[0-8])\d{3}$",
            Country::De => r"^\d{5}$",
            Country::Nl => r"(?i)^(?:NL-)?\d{4}\s*[A-Za-z]{2}$",
            Country::Us => r"^\d{5}(?:-\d{4})?$",
        }
    }

    /// Example text for the postal field's `title` attribute.
    pub fn postal_example(&self) -> &'static str {
        match self {
            Country::Ch => "e.g., 1111",
            Country::Fr => "e.g., 00123",
            Country::De => "e.g., 12345",
            Country::Nl => "e.g., 9438AE or 1000AB or 2378sc",
            Country::Us => "e.g., 12345 or 12345-6789",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::Ch => write!(f, "Switzerland"),
            Country::Fr => write!(f, "France"),
            Country::De => write!(f, "Germany"),
            Country::Nl => write!(f, "The Netherlands"),
            Country::Us => write!(f, "United States"),
        }
    }
}

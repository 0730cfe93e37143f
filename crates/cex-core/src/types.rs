//! Domain types shared by every Country Explorer crate

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::population::PopulationSeries;

/// Lookup key for a country, as used by the Remote Data Service (e.g. `NO`, `UA`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a code without validation (trusted input, e.g. API payloads)
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parse user-supplied input (CLI flags).
    ///
    /// Surrounding whitespace is removed and the code is uppercased; the
    /// remainder must be non-empty ASCII alphanumerics so it can be used as a
    /// single URL path segment.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::invalid_country_code(input));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the available-countries listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: CountryCode,
    pub name: String,
}

impl CountrySummary {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: CountryCode::new(code),
            name: name.into(),
        }
    }
}

/// A neighbouring country, linked from the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderCountry {
    pub code: CountryCode,
    pub common_name: String,
}

impl BorderCountry {
    pub fn new(code: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            code: CountryCode::new(code),
            common_name: common_name.into(),
        }
    }
}

/// Everything the detail view shows for a single country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub code: CountryCode,
    pub common_name: String,
    pub flag_url: Option<String>,
    /// Empty when the service reports no borders (absent or null)
    pub borders: Vec<BorderCountry>,
    pub population: PopulationSeries,
}

/// Which view is on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Paginated listing of all available countries
    #[default]
    Home,
    /// Detail view for one country
    Country(CountryCode),
}

impl Route {
    pub fn country(code: impl Into<String>) -> Self {
        Route::Country(CountryCode::new(code))
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }

    pub fn country_code(&self) -> Option<&CountryCode> {
        match self {
            Route::Home => None,
            Route::Country(code) => Some(code),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Country(code) => write!(f, "/country/{}", code),
        }
    }
}

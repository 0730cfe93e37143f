//! Headless mode - JSON output instead of the TUI
//!
//! Prints the result of a single listing or detail request to stdout as NDJSON
//! (one JSON object per line), so scripts can consume country data without
//! parsing terminal escape codes.
//!
//! # Example Output
//!
//! ```json
//! {"event":"page","page":1,"page_count":13,"page_size":20,"total":250,"has_previous":false,"has_next":true,"countries":[{"code":"AD","name":"Andorra"}],"timestamp":1704700001000}
//! {"event":"country","code":"NO","name":"Norway","flag_url":"https://...","borders":[...],"population":[{"year":1960,"value":3581239}],"timestamp":1704700002000}
//! {"event":"error","message":"Network error: connection refused","fatal":true,"timestamp":1704700003000}
//! ```

pub mod runner;

use std::io::{self, Write};

use cex_core::{CountryDetail, CountrySummary, PopulationPoint};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// Page size used when neither the CLI nor the config file sets one
pub const DEFAULT_HEADLESS_PAGE_SIZE: usize = 20;

/// A country reference in headless output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

impl From<&CountrySummary> for CountryEntry {
    fn from(country: &CountrySummary) -> Self {
        Self {
            code: country.code.to_string(),
            name: country.name.clone(),
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One page of the country listing
    Page {
        page: usize,
        page_count: usize,
        page_size: usize,
        total: usize,
        has_previous: bool,
        has_next: bool,
        countries: Vec<CountryEntry>,
        timestamp: i64,
    },

    /// Detail of one country
    Country {
        code: String,
        name: String,
        flag_url: Option<String>,
        borders: Vec<CountryEntry>,
        population: Vec<PopulationPoint>,
        timestamp: i64,
    },

    /// The country has no population series
    NoPopulationData { code: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.emit_to(&mut stdout);
    }

    /// Write this event as one NDJSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn page(
        page: usize,
        page_count: usize,
        page_size: usize,
        total: usize,
        countries: &[CountrySummary],
    ) -> Self {
        Self::Page {
            page,
            page_count,
            page_size,
            total,
            has_previous: page > 1,
            has_next: page < page_count,
            countries: countries.iter().map(CountryEntry::from).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn country(detail: &CountryDetail) -> Self {
        Self::Country {
            code: detail.code.to_string(),
            name: detail.common_name.clone(),
            flag_url: detail.flag_url.clone(),
            borders: detail
                .borders
                .iter()
                .map(|b| CountryEntry {
                    code: b.code.to_string(),
                    name: b.common_name.clone(),
                })
                .collect(),
            population: detail.population.points().to_vec(),
            timestamp: Self::now(),
        }
    }

    pub fn no_population_data(code: &str) -> Self {
        Self::NoPopulationData {
            code: code.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

//! Data access trait for country information
//!
//! The TUI, the headless runner and tests all go through this trait; the
//! HTTP implementation lives in [`crate::client`].

use cex_core::{CountryCode, CountryDetail, CountrySummary};

use crate::error::ApiError;

/// Country data operations.
///
/// `CountryService` is the `Send` variant used by spawned fetch tasks.
#[trait_variant::make(CountryService: Send)]
pub trait LocalCountryService {
    /// Fetch the full collection of available countries
    async fn list_countries(&self) -> Result<Vec<CountrySummary>, ApiError>;

    /// Fetch name, flag, borders and population for one country
    async fn country_info(&self, code: &CountryCode) -> Result<CountryDetail, ApiError>;
}

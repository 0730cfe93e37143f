//! # cex-api - Remote Data Service client
//!
//! Talks to the REST service that supplies country metadata and population
//! series. The rest of the workspace only sees the [`CountryService`] trait
//! and the domain types from `cex-core`; wire DTOs stay private to this crate.
//!
//! ## Endpoints
//!
//! - `GET {base}/AvailableCountries` → [`CountryService::list_countries`]
//! - `GET {base}/country-info/{code}` → [`CountryService::country_info`]

pub mod client;
pub mod error;
mod response;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod types;

pub use client::{HttpCountryService, DEFAULT_TIMEOUT};
pub use error::ApiError;
pub use service::{CountryService, LocalCountryService};

//! # cex-core - Core Domain Types
//!
//! Foundation crate for Country Explorer. Provides domain types, pagination
//! arithmetic, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`CountryCode`] - Lookup key for a country (ISO-like code)
//! - [`CountrySummary`] - One entry of the available-countries listing
//! - [`CountryDetail`] - Name, flag, borders and population of one country
//! - [`BorderCountry`] - A neighbouring country reachable from the detail view
//! - [`Route`] - Which view is on screen (Home listing or a country)
//!
//! ### Population (`population`)
//! - [`PopulationSeries`] - Population counts, or explicitly no data
//! - [`PopulationPoint`] - A single (year, value) sample
//! - [`ChartData`] - Labels/values derived from a series for plotting
//!
//! ### Pagination (`pagination`)
//! - [`Pagination`] - 1-based page cursor with page size
//! - [`page_size_for_height()`] - Viewport-driven page size
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs context on the error path
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cex_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod pagination;
pub mod population;
pub mod types;

/// Prelude for common imports used throughout all Country Explorer crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use pagination::{page_size_for_height, Pagination};
pub use population::{ChartData, PopulationPoint, PopulationSeries};
pub use types::{BorderCountry, CountryCode, CountryDetail, CountrySummary, Route};

//! Country Explorer
//!
//! Browse a REST country-data service from the terminal, or print results as
//! NDJSON in headless mode.

pub mod headless;

pub use headless::runner::{run_headless, HeadlessRequest};
pub use headless::DEFAULT_HEADLESS_PAGE_SIZE;

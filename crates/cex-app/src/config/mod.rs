//! Configuration file parsing for Country Explorer
//!
//! Supports `~/.config/country-explorer/config.toml` plus the `API_URL`
//! environment variable for the service base URL.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_default_settings, load_settings,
    resolve_api_url, API_URL_ENV, DEFAULT_API_URL,
};
pub use types::*;

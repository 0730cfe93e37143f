//! Configuration types for Country Explorer
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Per-section settings for the API client, the listing and the UI

use serde::{Deserialize, Serialize};

/// Rows the listing reserves around the country list: header (3),
/// page navigation bar (3) and the list's own borders (2).
pub const DEFAULT_HEADER_HEIGHT: u16 = 8;

/// Rows taken by one country entry in the listing
pub const DEFAULT_ITEM_HEIGHT: u16 = 1;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub listing: ListingSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote Data Service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL for all requests. `API_URL` and `--api-url` take precedence.
    #[serde(default)]
    pub url: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Listing view settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListingSettings {
    /// Fixed page size. When unset the page size follows the terminal height.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Rows not available to list entries
    #[serde(default = "default_header_height")]
    pub header_height: u16,

    /// Rows per list entry
    #[serde(default = "default_item_height")]
    pub item_height: u16,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: None,
            header_height: default_header_height(),
            item_height: default_item_height(),
        }
    }
}

fn default_header_height() -> u16 {
    DEFAULT_HEADER_HEIGHT
}

fn default_item_height() -> u16 {
    DEFAULT_ITEM_HEIGHT
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll timeout; one tick per timeout drives the spinner
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show the key binding hints in the navigation bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_key_hints: true,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

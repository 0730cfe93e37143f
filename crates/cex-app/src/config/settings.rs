//! Settings loader for config.toml and API URL resolution

use std::path::{Path, PathBuf};

use cex_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "country-explorer";

/// Environment variable holding the Remote Data Service base URL
pub const API_URL_ENV: &str = "API_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Default location of the config file (`~/.config/country-explorer/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`
///
/// Missing or unreadable files fall back to defaults; this never fails.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from the default location
pub fn load_default_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Country Explorer Configuration

[api]
# url = "http://localhost:3000/api"   # API_URL and --api-url take precedence
timeout_ms = 10000

[listing]
# page_size = 20        # Fixed page size; unset = follow terminal height
header_height = 8       # Rows reserved around the list
item_height = 1         # Rows per country

[ui]
tick_rate_ms = 100
show_key_hints = true
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

/// Pick the API base URL.
///
/// Precedence: CLI flag, then the `API_URL` environment value, then the
/// config file, then [`DEFAULT_API_URL`]. Blank values are skipped.
pub fn resolve_api_url(cli: Option<&str>, env: Option<&str>, settings: &Settings) -> String {
    [cli, env, settings.api.url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// Application configuration
///
/// The browser works with zero configuration. Optional overrides come from:
/// 1. A JSON file in the user's config directory:
///    - Linux: ~/.config/artwork-browser/config.json
///    - macOS: ~/Library/Application Support/artwork-browser/config.json
///    - Windows: %APPDATA%\artwork-browser\config.json
/// 2. Environment variables (`ARTWORK_BROWSER_API_URL`, `ARTWORK_BROWSER_ROWS`),
///    which win over the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default catalog endpoint (Art Institute of Chicago public API)
pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Rows shown per page, matching the paginator
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Number of numbered page links in the paginator
pub const DEFAULT_PAGE_LINKS: u32 = 5;

const ENV_API_URL: &str = "ARTWORK_BROWSER_API_URL";
const ENV_ROWS: &str = "ARTWORK_BROWSER_ROWS";

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the paginated artworks endpoint
    pub api_url: String,
    /// Records requested and displayed per page
    pub rows_per_page: usize,
    /// How many numbered page links the paginator shows
    pub page_links: u32,
}

/// On-disk shape: every field optional so partial files work
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    rows_per_page: Option<usize>,
    page_links: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_links: DEFAULT_PAGE_LINKS,
        }
    }
}

impl Config {
    /// Load the configuration file (if any) and apply environment overrides.
    ///
    /// Never fails: a broken file is logged and defaults are used instead,
    /// since the browser is fully usable without any configuration.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from an explicit file path (if any) and an override lookup.
    ///
    /// A missing, unreadable or invalid file yields the defaults; bad
    /// overrides are skipped.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path.filter(|p| p.exists()) {
            Some(path) => match std::fs::read_to_string(path)
                .map_err(ConfigError::from)
                .and_then(|json| Self::from_json(&json))
            {
                Ok(config) => {
                    log::info!("⚙️  Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("⚠️  Ignoring config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Err(e) = config.apply_overrides(lookup) {
            log::warn!("⚠️  Ignoring environment override: {}", e);
        }

        config
    }

    /// Get the path where the config file is expected
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("artwork-browser");
        path.push("config.json");
        Some(path)
    }

    /// Parse a config file body on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;
        let defaults = Self::default();

        let config = Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            rows_per_page: file.rows_per_page.unwrap_or(defaults.rows_per_page),
            page_links: file.page_links.unwrap_or(defaults.page_links),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    ///
    /// Overrides are applied one at a time; an invalid value leaves the
    /// corresponding field untouched.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_ROWS) {
            let rows = parse_rows(&raw)?;
            self.rows_per_page = rows;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_page == 0 {
            return Err(ConfigError::Invalid {
                field: "rows_per_page",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.page_links == 0 {
            return Err(ConfigError::Invalid {
                field: "page_links",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_rows(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            field: ENV_ROWS,
            reason: "must be at least 1".to_string(),
        }),
        Ok(rows) => Ok(rows),
        Err(e) => Err(ConfigError::Invalid {
            field: ENV_ROWS,
            reason: e.to_string(),
        }),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Loading user preferences from `settings.toml`.
//!
//! The file is only read; the app never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[search]` - API key and Pixabay request filters
//! - `[gallery]` - Grid columns and thumbnail cache size
//!
//! The API key can also come from the `IMAGE_FINDER_API_KEY` environment
//! variable, which takes precedence over the file.
//!
//! # Examples
//!
//! ```no_run
//! use image_finder::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} columns", config.gallery_columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::infrastructure::PixabaySettings;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[search] api_key`.
pub const ENV_API_KEY: &str = "IMAGE_FINDER_API_KEY";

/// Warning key returned when an existing config file cannot be read.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Search service settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SearchConfig {
    /// Pixabay API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API endpoint, for proxies or test servers.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub image_type: Option<String>,

    #[serde(default)]
    pub orientation: Option<String>,

    #[serde(default)]
    pub safe_search: Option<bool>,
}

/// Gallery layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of thumbnail columns.
    #[serde(default = "default_columns")]
    pub columns: Option<u16>,

    /// Number of decoded thumbnails kept in memory.
    #[serde(default = "default_thumbnail_cache_size")]
    pub thumbnail_cache_size: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            thumbnail_cache_size: default_thumbnail_cache_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Builds the search adapter settings, reading the API key from the
    /// environment first.
    #[must_use]
    pub fn pixabay_settings(&self) -> PixabaySettings {
        let env_key = std::env::var(ENV_API_KEY).ok();
        self.pixabay_settings_with_env_key(env_key)
    }

    fn pixabay_settings_with_env_key(&self, env_key: Option<String>) -> PixabaySettings {
        let search = &self.search;
        PixabaySettings {
            base_url: search
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: resolve_api_key(env_key, search.api_key.clone()),
            image_type: search
                .image_type
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string()),
            orientation: search
                .orientation
                .clone()
                .unwrap_or_else(|| DEFAULT_ORIENTATION.to_string()),
            safe_search: search.safe_search.unwrap_or(DEFAULT_SAFE_SEARCH),
        }
    }

    /// Returns the grid column count clamped to the supported range.
    #[must_use]
    pub fn gallery_columns(&self) -> u16 {
        self.gallery
            .columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }

    /// Returns the thumbnail cache capacity clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_size(&self) -> usize {
        self.gallery
            .thumbnail_cache_size
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_SIZE)
            .clamp(MIN_THUMBNAIL_CACHE_SIZE, MAX_THUMBNAIL_CACHE_SIZE)
    }
}

/// Picks the first non-blank key, environment before file.
fn resolve_api_key(env_key: Option<String>, config_key: Option<String>) -> Option<String> {
    [env_key, config_key]
        .into_iter()
        .flatten()
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_thumbnail_cache_size() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning_key). A missing file yields
/// defaults silently; an unreadable one yields defaults and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir`, or from the resolved config
/// directory when `None`.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let config_dir = base_dir.or_else(paths::get_app_config_dir);
    if let Some(path) = config_dir.map(|dir| dir.join(CONFIG_FILE)) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

//! Config - Application Configuration
//!
//! Read-only startup configuration loaded from `counter-app.toml` in the
//! platform config directory. The count itself is never stored here.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language code (`en`, `zh`); detected from the system when unset
    pub locale: Option<String>,
    /// Initial window settings
    pub window: WindowConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial width in pixels
    pub width: f32,
    /// Initial height in pixels
    pub height: f32,
    /// Window title; the localized app title when unset
    pub title: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: None,
        }
    }
}

impl WindowConfig {
    /// Window size raised to the minimum dimensions
    pub fn clamped_size(&self) -> (f32, f32) {
        let width = if self.width.is_finite() { self.width } else { DEFAULT_WINDOW_WIDTH };
        let height = if self.height.is_finite() { self.height } else { DEFAULT_WINDOW_HEIGHT };
        (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
    }
}

impl AppConfig {
    /// Load config from the platform config directory
    ///
    /// A missing or blank file yields the defaults.
    pub fn try_load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Parse config from TOML text
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Configured locale, if it names a supported language
    pub fn configured_locale(&self) -> Option<Locale> {
        self.locale.as_deref().and_then(Locale::from_code)
    }

    /// Resolve the startup locale: config, then system, then English
    pub fn resolve_locale(&self) -> Locale {
        self.configured_locale()
            .or_else(system_locale)
            .unwrap_or_default()
    }
}

/// Detect the system language
fn system_locale() -> Option<Locale> {
    let current = locale_config::Locale::current().to_string();
    // Tags look like "en-US" or "zh-CN,en-US"
    current.split(',').next().and_then(Locale::from_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_uses_defaults() {
        let config = AppConfig::from_toml_str("  \n").expect("parse");
        assert!(config.locale.is_none());
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert!(config.window.title.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_toml_str(
            r#"
            locale = "zh"

            [window]
            width = 900.0
            "#,
        )
        .expect("parse");

        assert_eq!(config.configured_locale(), Some(Locale::ZhCN));
        assert_eq!(config.resolve_locale(), Locale::ZhCN);
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn test_window_title() {
        let config = AppConfig::from_toml_str("[window]\ntitle = \"Tally\"").expect("parse");
        assert_eq!(config.window.title.as_deref(), Some("Tally"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(AppConfig::from_toml_str("locale = ").is_err());
        assert!(AppConfig::from_toml_str("[window]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn test_unknown_locale_is_ignored() {
        let config = AppConfig::from_toml_str("locale = \"fr\"").expect("parse");
        assert_eq!(config.configured_locale(), None);
    }

    #[test]
    fn test_window_size_is_clamped_to_minimum() {
        let window = WindowConfig {
            width: 10.0,
            height: 10_000.0,
            title: None,
        };
        assert_eq!(window.clamped_size(), (MIN_WINDOW_WIDTH, 10_000.0));

        let window = WindowConfig {
            width: f32::NAN,
            height: f32::INFINITY,
            title: None,
        };
        assert_eq!(
            window.clamped_size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[matting]` - Model download URL and expected checksum
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_MATTE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR: &str = "IcedMatte";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "defaults::default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: defaults::default_theme_mode(),
        }
    }
}

/// Background-removal engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MattingConfig {
    /// Override for the model download URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,

    /// Expected BLAKE3 checksum of the model file. Verified after download
    /// when present; no verification happens when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_checksum: Option<String>,
}

impl MattingConfig {
    /// Returns the effective model URL, falling back to the default.
    pub fn url(&self) -> &str {
        self.model_url.as_deref().unwrap_or(DEFAULT_MODEL_URL)
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub matting: MattingConfig,
}

/// Resolves the directory holding `settings.toml`.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ICED_MATTE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    // Respect XDG_CONFIG_HOME when set (tests rely on this).
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Loads the configuration, returning defaults together with a notification
/// key when the file exists but cannot be read or parsed.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some("notification-config-load-error")),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved config path.
pub fn save(config: &Config) -> Result<()> {
    let path = config_path().ok_or_else(|| Error::Config("no config directory".into()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::env_lock;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("ICED_MATTE_CONFIG_DIR").ok();
        std::env::set_var("ICED_MATTE_CONFIG_DIR", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("ICED_MATTE_CONFIG_DIR", value);
        } else {
            std::env::remove_var("ICED_MATTE_CONFIG_DIR");
        }
    }

    #[test]
    fn default_config_round_trips() {
        with_temp_config_dir(|dir| {
            let config = Config::default();
            save(&config).expect("save default config");

            let loaded = load_from_path(&dir.join(CONFIG_FILE)).expect("reload config");
            assert_eq!(loaded, config);
        });
    }

    #[test]
    fn modified_values_survive_round_trip() {
        with_temp_config_dir(|dir| {
            let mut config = Config::default();
            config.general.language = Some("fr".into());
            config.general.theme_mode = ThemeMode::Dark;
            config.matting.model_url = Some("https://example.invalid/model.onnx".into());
            save(&config).expect("save config");

            let loaded = load_from_path(&dir.join(CONFIG_FILE)).expect("reload config");
            assert_eq!(loaded.general.language.as_deref(), Some("fr"));
            assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
            assert_eq!(
                loaded.matting.url(),
                "https://example.invalid/model.onnx"
            );
        });
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        with_temp_config_dir(|_| {
            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert!(warning.is_none());
        });
    }

    #[test]
    fn corrupt_file_yields_defaults_with_warning() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join(CONFIG_FILE), "general = not valid toml [").expect("write");
            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert_eq!(warning, Some("notification-config-load-error"));
        });
    }

    #[test]
    fn matting_url_falls_back_to_default() {
        let config = MattingConfig::default();
        assert_eq!(config.url(), DEFAULT_MODEL_URL);
    }
}

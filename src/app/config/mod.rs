// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Control panel visibility and initial auto-rotate state
//! - `[diagnostics]` - In-memory event buffer size
//!
//! # Path Resolution
//!
//! 1. `load_from_path()` with an explicit path
//! 2. `load_with_override()` with a base directory
//! 3. Otherwise the directory comes from [`paths`](crate::app::paths)
//!    (`--config-dir`, `MODEL_LENS_CONFIG_DIR`, platform default)
//!
//! The file is edited by hand; the application only reads it. Viewer state
//! (the loaded model, playback) is never persisted.
//!
//! # Examples
//!
//! ```no_run
//! use model_lens::app::config;
//!
//! let (config, warning) = config::load_with_override(None);
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! # let _ = config;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

/// Viewer presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Show the playback controls and status panels next to the preview.
    #[serde(
        default = "default_show_controls",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_controls: Option<bool>,

    /// Initial auto-rotate state of a new viewer.
    #[serde(
        default = "default_auto_rotate",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate: Option<bool>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_controls: default_show_controls(),
            auto_rotate: default_auto_rotate(),
        }
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory (clamped to the supported range).
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_show_controls() -> Option<bool> {
    Some(DEFAULT_SHOW_CONTROLS)
}

fn default_auto_rotate() -> Option<bool> {
    Some(DEFAULT_AUTO_ROTATE)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
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

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from `base_dir`, or the resolved config
/// directory when `None`.
///
/// Returns `(config, optional_warning_key)`. A missing file yields defaults
/// silently; an unreadable one yields defaults plus [`LOAD_ERROR_KEY`].
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(LOAD_ERROR_KEY.to_string())),
            };
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("serialize config");
        fs::write(path, content).expect("write config");
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.viewer.show_controls, Some(true));
        assert_eq!(config.viewer.auto_rotate, Some(true));
        assert_eq!(
            config.diagnostics.buffer_capacity,
            Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
        );
    }

    #[test]
    fn written_settings_load_back_unchanged() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig {
                show_controls: Some(false),
                auto_rotate: Some(false),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(250),
            },
        };

        write_config(&config, &path);
        let loaded = load_from_path(&path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("write file");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config =
            toml::from_str("[viewer]\nshow_controls = false\n").expect("valid config");
        assert_eq!(config.viewer.show_controls, Some(false));
        assert_eq!(config.viewer.auto_rotate, Some(true));
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn serialized_config_uses_sectioned_format() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(content.contains("[general]"));
        assert!(content.contains("[viewer]"));
        assert!(content.contains("[diagnostics]"));
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.general.theme_mode = ThemeMode::Dark;

        write_config(&config, &base_dir.join("settings.toml"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode, and the name shown in the greeting
//! - `[roku]` - TV address, power polling, request timeout, volume steps
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `HOME_DECK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use home_deck::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.roku.ip = Some("192.168.1.40".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the TV address.
pub const ENV_ROKU_IP: &str = "ROKU_IP";

// =============================================================================
// Section Structs
// =============================================================================

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

    /// Name used in the page greeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            user_name: None,
        }
    }
}

impl GeneralConfig {
    /// Greeting name, falling back to [`DEFAULT_USER_NAME`] when unset or blank.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_USER_NAME)
    }
}

/// Roku TV connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RokuConfig {
    /// IP address or host name of the TV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Seconds between power-mode queries while Quick Controls is open.
    #[serde(
        default = "default_poll_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub poll_interval_secs: Option<u64>,

    /// Timeout for a single request to the TV.
    #[serde(
        default = "default_request_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_ms: Option<u64>,

    /// Keypresses sent per volume up/down press.
    #[serde(
        default = "default_volume_steps",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_steps: Option<u32>,
}

impl Default for RokuConfig {
    fn default() -> Self {
        Self {
            ip: None,
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_ms: default_request_timeout_ms(),
            volume_steps: default_volume_steps(),
        }
    }
}

impl RokuConfig {
    /// Poll interval clamped to the supported range.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        let secs = self
            .poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
            .clamp(MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let ms = self
            .request_timeout_ms
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
            .clamp(MIN_REQUEST_TIMEOUT_MS, MAX_REQUEST_TIMEOUT_MS);
        Duration::from_millis(ms)
    }

    /// Volume steps capped at [`MAX_VOLUME_STEPS`]. Zero is allowed and sends nothing.
    #[must_use]
    pub fn volume_steps(&self) -> u32 {
        self.volume_steps
            .unwrap_or(DEFAULT_VOLUME_STEPS)
            .min(MAX_VOLUME_STEPS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Roku TV settings.
    #[serde(default)]
    pub roku: RokuConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_poll_interval_secs() -> Option<u64> {
    Some(DEFAULT_POLL_INTERVAL_SECS)
}

fn default_request_timeout_ms() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_MS)
}

fn default_volume_steps() -> Option<u32> {
    Some(DEFAULT_VOLUME_STEPS)
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
// Roku Address Resolution
// =============================================================================

/// Picks the TV address: CLI flag, then `ROKU_IP`, then the settings file.
///
/// Blank values are skipped so an empty `ROKU_IP=` does not mask the config.
#[must_use]
pub fn resolve_roku_address(
    cli: Option<&str>,
    env: Option<&str>,
    config: &RokuConfig,
) -> Option<String> {
    [cli, env, config.ip.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads `ROKU_IP` from the process environment.
#[must_use]
pub fn roku_address_from_env() -> Option<String> {
    std::env::var(ENV_ROKU_IP).ok()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "settings unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
                user_name: Some("Sam".to_string()),
            },
            roku: RokuConfig {
                ip: Some("10.0.0.12".to_string()),
                poll_interval_secs: Some(5),
                request_timeout_ms: Some(1500),
                volume_steps: Some(3),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[roku\nip = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str("[roku]\nip = \"192.168.1.40\"\n").expect("parse");
        assert_eq!(config.roku.ip.as_deref(), Some("192.168.1.40"));
        assert_eq!(config.roku.poll_interval_secs, Some(DEFAULT_POLL_INTERVAL_SECS));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn roku_values_are_clamped() {
        let roku = RokuConfig {
            ip: None,
            poll_interval_secs: Some(0),
            request_timeout_ms: Some(60_000),
            volume_steps: Some(99),
        };
        assert_eq!(roku.poll_interval(), Duration::from_secs(MIN_POLL_INTERVAL_SECS));
        assert_eq!(
            roku.request_timeout(),
            Duration::from_millis(MAX_REQUEST_TIMEOUT_MS)
        );
        assert_eq!(roku.volume_steps(), MAX_VOLUME_STEPS);
    }

    #[test]
    fn user_name_falls_back_when_blank() {
        let mut general = GeneralConfig::default();
        assert_eq!(general.user_name(), DEFAULT_USER_NAME);
        general.user_name = Some("   ".to_string());
        assert_eq!(general.user_name(), DEFAULT_USER_NAME);
        general.user_name = Some("Jo".to_string());
        assert_eq!(general.user_name(), "Jo");
    }

    #[test]
    fn roku_address_prefers_cli_then_env_then_config() {
        let roku = RokuConfig {
            ip: Some("10.0.0.3".to_string()),
            ..RokuConfig::default()
        };

        assert_eq!(
            resolve_roku_address(Some("10.0.0.1"), Some("10.0.0.2"), &roku).as_deref(),
            Some("10.0.0.1")
        );
        assert_eq!(
            resolve_roku_address(None, Some("10.0.0.2"), &roku).as_deref(),
            Some("10.0.0.2")
        );
        assert_eq!(
            resolve_roku_address(None, Some("  "), &roku).as_deref(),
            Some("10.0.0.3")
        );
        assert_eq!(
            resolve_roku_address(None, None, &RokuConfig::default()),
            None
        );
    }
}

//! Configuration management for filenav

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File-list configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Allow Shift range selection in file lists
    #[serde(default = "default_allow_multiple")]
    pub allow_multiple: bool,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_allow_multiple() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_multiple: default_allow_multiple(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filenav")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.allow_multiple);
        assert_eq!(config.keys, KeyBindings::default());
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let mut keys = KeyBindings::default();
        keys.set("n", Action::SelectNext);
        let config = Config {
            allow_multiple: false,
            keys,
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("expected missing config to fail")?;
        assert!(err.to_string().contains("Failed to read config"));
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json")?;

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("expected invalid config to fail")?;
        assert!(err.to_string().contains("Failed to parse config"));
        Ok(())
    }

    #[test]
    fn test_load_merges_default_keys() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"allow_multiple": false, "keys": {"bindings": {"n": "select_next"}}}"#,
        )?;

        let config = Config::load_from(&config_path)?;

        assert!(!config.allow_multiple);
        assert_eq!(
            config.keys.get_action(KeyCode::Char('n'), KeyModifiers::NONE),
            Some(Action::SelectNext)
        );
        assert_eq!(
            config.keys.get_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::CloseDetail)
        );
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config: Config = serde_json::from_str("{}")?;

        assert!(config.allow_multiple);
        assert_eq!(config.keys, KeyBindings::default());
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("deep/nested/config.json");

        Config::default().save_to(&nested_path)?;

        assert!(nested_path.exists());
        Ok(())
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.ends_with("filenav/config.json"));
    }
}

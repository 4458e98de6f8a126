//! NewsPrefs configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main NewsPrefs configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration
    pub storage: StorageConfig,

    /// Form behavior tuning
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .newsprefs.yml
        let local_config = PathBuf::from(".newsprefs.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/newsprefs/newsprefs.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("newsprefs").join("newsprefs.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the preferences slot
    #[serde(rename = "store-dir")]
    pub store_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("newsprefs"),
        }
    }
}

/// Form behavior tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,

    /// How long the save acknowledgment label stays visible, in milliseconds
    #[serde(rename = "save-ack-ms")]
    pub save_ack_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            save_ack_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.store_dir.ends_with("newsprefs"));
        assert_eq!(config.ui.tick_rate_ms, 33);
        assert_eq!(config.ui.save_ack_ms, 2_000);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
storage:
  store-dir: /tmp/newsprefs-test

ui:
  tick-rate-ms: 50
  save-ack-ms: 1000
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.storage.store_dir, PathBuf::from("/tmp/newsprefs-test"));
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.save_ack_ms, 1000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
ui:
  save-ack-ms: 500
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.ui.save_ack_ms, 500);

        // Defaults for unspecified
        assert_eq!(config.ui.tick_rate_ms, 33);
        assert!(config.storage.store_dir.ends_with("newsprefs"));
    }
}

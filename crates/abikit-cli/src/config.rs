//! CLI configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::CliError;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print the `0x` marker before encoded output
    #[serde(default = "default_prefix")]
    pub prefix: bool,
    /// Print one 32-byte word per line
    #[serde(default)]
    pub words: bool,
    /// Emit JSON instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_prefix() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            words: false,
            json: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".abikit"))
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load_from(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), CliError> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.prefix);
        assert!(!config.words);
        assert!(!config.json);
    }

    #[test]
    fn test_config_serialize() {
        let toml = toml::to_string(&Config::default()).unwrap();
        assert!(toml.contains("prefix"));
        assert!(toml.contains("words"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: Config = toml::from_str("words = true").unwrap();
        assert!(config.prefix);
        assert!(config.words);
        assert!(!config.json);
    }

    #[test]
    fn test_load_missing_is_default() {
        let config = Config::load_from(Some(Path::new("/nonexistent/abikit/config.toml")));
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(None), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            prefix: false,
            words: true,
            json: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(Some(&path)), config);
    }
}

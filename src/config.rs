//! User configuration (`config.toml`)
//!
//! ```toml
//! data_dir = "/home/me/.local/share/runku"
//! vocabulary_path = "/home/me/runku/vocabulary.json"
//! recent_days = 7
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::FileStore;

/// Environment variable that overrides the configured data directory
pub const DATA_DIR_ENV: &str = "RUNKU_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Data directory not found")]
    DataDirNotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where learning data is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Local word list used by `study` and `stats`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_path: Option<PathBuf>,
    /// Number of days shown in the recent activity view
    pub recent_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            vocabulary_path: None,
            recent_days: 7,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join("runku").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Data directory, by precedence: explicit override, `RUNKU_DATA_DIR`,
    /// config file, platform default
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        self.resolve_data_dir_with(override_dir, std::env::var_os(DATA_DIR_ENV))
    }

    /// Same as [`Config::resolve_data_dir`] with the environment value passed in
    pub fn resolve_data_dir_with(
        &self,
        override_dir: Option<&Path>,
        env_dir: Option<OsString>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = env_dir.filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        FileStore::default_data_dir().map_err(|_| ConfigError::DataDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.recent_days, 7);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::from_toml(r#"vocabulary_path = "/tmp/words.json""#).unwrap();
        assert_eq!(config.vocabulary_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.data_dir, None);
        assert_eq!(config.recent_days, 7);
    }

    #[test]
    fn test_invalid_config() {
        let result = Config::from_toml("recent_days = \"seven\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_override_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = config
            .resolve_data_dir_with(Some(Path::new("/from/flag")), Some(OsString::from("/from/env")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_env_beats_config_file() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        let dir = config
            .resolve_data_dir_with(None, Some(OsString::from("/from/env")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    fn test_config_file_beats_platform_default() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_data_dir_with(None, None).unwrap(),
            PathBuf::from("/from/config")
        );

        // An empty variable counts as unset
        assert_eq!(
            config.resolve_data_dir_with(None, Some(OsString::new())).unwrap(),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_platform_default_last() {
        let config = Config::default();
        match FileStore::default_data_dir() {
            Ok(expected) => assert_eq!(config.resolve_data_dir_with(None, None).unwrap(), expected),
            Err(_) => assert!(matches!(
                config.resolve_data_dir_with(None, None),
                Err(ConfigError::DataDirNotFound)
            )),
        }
    }
}

//! `config.toml` loading.
//!
//! Every field has a default, so an empty or missing file is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculate::MergeOptions;
use crate::models::{Device, Region};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// `[server]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Allowed CORS origin, or `*` for any
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origin: "*".into(),
        }
    }
}

/// `[ranking]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Region given to players synthesized from skill assessments
    pub default_region: Region,

    /// Device given to players synthesized from skill assessments
    pub default_device: Device,

    /// Merge skill assessments into the leaderboard
    pub include_assessments: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_region: Region::default(),
            default_device: Device::default(),
            include_assessments: true,
        }
    }
}

impl RankingConfig {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            default_region: self.default_region,
            default_device: self.default_device,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub server: ServerConfig,
    pub ranking: RankingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            log_level: "info".into(),
            server: ServerConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(&std::fs::read_to_string(path)?)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert!(config.ranking.include_assessments);
        assert_eq!(config.ranking.default_region, Region::NA);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.data_dir = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/srv/tiers"

            [ranking]
            default_region = "EU"
            default_device = "mobile"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/tiers"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ranking.default_region, Region::EU);
        assert_eq!(config.ranking.default_device, Device::Mobile);
        assert!(config.ranking.include_assessments);

        let options = config.ranking.merge_options();
        assert_eq!(options.default_region, Region::EU);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.cors_origin, "*");
    }

    #[test]
    fn test_from_file_and_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.server.port, 8080);

        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 9000);

        std::fs::write(&path, "[server]\nport = 0\n").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Invalid(_))
        ));

        std::fs::write(&path, "[server\n").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let parsed: AppConfig = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();

        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.ranking.default_device, config.ranking.default_device);
    }
}

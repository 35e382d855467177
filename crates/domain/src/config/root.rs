use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::hip5::Hip5Config;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "hip5.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/hip5/config.toml";

/// Main configuration structure for the HIP-5 middleware
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Protocol set and handler policy
    #[serde(default)]
    pub hip5: Hip5Config,

    /// Root response cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hip5.toml in current directory
    /// 3. /etc/hip5/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            Self::from_file(path)
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hip5
            .protocol_set()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.hip5.handler_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "handler_timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.hip5.synthetic_tld.is_empty() {
            return Err(ConfigError::Validation(
                "synthetic_tld cannot be empty".to_string(),
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "cache.max_entries cannot be 0".to_string(),
            ));
        }

        if self.cache.min_ttl > self.cache.max_ttl {
            return Err(ConfigError::Validation(format!(
                "cache.min_ttl ({}) exceeds cache.max_ttl ({})",
                self.cache.min_ttl, self.cache.max_ttl
            )));
        }

        Ok(())
    }
}

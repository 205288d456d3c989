//! Configuration management for SMAP Finder
//!
//! Provides a TOML-backed application configuration with zero-config
//! defaults: without a config file the finder talks to the NSIDC archive
//! anonymously. The catalog endpoint is explicit configuration rather than
//! a hardwired process-wide constant, so tests can point the client at
//! fixtures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{ftp, logging};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote catalog endpoint settings
    pub catalog: CatalogConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Remote catalog endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Archive hostname
    pub host: String,
    /// FTP control port
    pub port: u16,
    /// Login username (anonymous by default)
    pub username: String,
    /// Login password (email by anonymous-FTP convention)
    pub password: String,
    /// Base path of the catalog on the archive
    pub root: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            host: ftp::HOST.to_string(),
            port: ftp::PORT,
            username: ftp::USERNAME.to_string(),
            password: ftp::PASSWORD.to_string(),
            root: ftp::CATALOG_ROOT.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no CLI verbosity flag is given
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or fall back to defaults when no
    /// path is given
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file is missing, unreadable, or not
    /// valid TOML, or when a value fails validation.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                let text = fs::read_to_string(path)?;
                let config: AppConfig = toml::from_str(&text)?;
                debug!("Loaded configuration from {}", path.display());
                config
            }
            None => {
                debug!("No configuration file given; using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check configuration values for internal consistency
    fn validate(&self) -> ConfigResult<()> {
        if self.catalog.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.host".to_string(),
                value: self.catalog.host.clone(),
                reason: "Hostname must not be empty".to_string(),
            });
        }
        if self.catalog.root.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.root".to_string(),
                value: self.catalog.root.clone(),
                reason: "Catalog root must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_nsidc() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.catalog.host, ftp::HOST);
        assert_eq!(config.catalog.root, ftp::CATALOG_ROOT);
        assert_eq!(config.catalog.username, "anonymous");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [catalog]
            host = "ftp.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.catalog.host, "ftp.example.org");
        assert_eq!(parsed.catalog.port, ftp::PORT);
        assert_eq!(parsed.logging.default_level, logging::DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/smap_finder.toml")));
        match result.unwrap_err() {
            ConfigError::NotFound { path } => {
                assert!(path.ends_with("smap_finder.toml"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = AppConfig {
            catalog: CatalogConfig {
                host: "  ".to_string(),
                ..CatalogConfig::default()
            },
            logging: LoggingConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}

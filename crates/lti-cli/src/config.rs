//! `lti` configuration file.
//!
//! The file is optional. Every section has defaults, so an empty file, a
//! partial file and no file at all are all valid.

use lti_core::PrefixClassifier;
use lti_core::ids::{DEFAULT_PREFIX, default_system_names};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Name used for the config directory and in user-facing hints.
pub const PROJECT_NAME: &str = "lti";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LTI_CONFIG";

/// Config file name inside the project config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LtiConfig {
    /// Where the store snapshot lives.
    pub store: StoreConfig,
    /// Isolation id format.
    pub ids: IdsConfig,
    /// Log output.
    pub logging: LoggingConfig,
    /// System code to display name.
    pub systems: BTreeMap<String, String>,
}

/// `[store]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON snapshot of the browser store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[ids]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    /// Literal token before the three-digit system code.
    pub prefix: String,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for LtiConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            ids: IdsConfig::default(),
            logging: LoggingConfig::default(),
            systems: default_system_names(),
        }
    }
}

impl LtiConfig {
    /// Loads the configuration from the resolved path.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an
    /// error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Reads and parses one config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The explicit path if given, otherwise the platform default.
    ///
    /// `LTI_CONFIG` is folded into the explicit path by the argument parser.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// `<config dir>/lti/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds the id classifier for the configured prefix.
    pub fn classifier(&self) -> Result<PrefixClassifier> {
        Ok(PrefixClassifier::new(self.ids.prefix.as_str())?)
    }
}

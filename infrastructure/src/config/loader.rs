//! Configuration loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::Path;
use tracing::{debug, warn};

/// Prefix for environment overrides, e.g. `FANOUT_PIPELINE__MAX_RESULTS=5`
pub const ENV_PREFIX: &str = "FANOUT_";

/// Configuration loader that merges defaults, a TOML file and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FANOUT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Default values
    ///
    /// Validation warnings are logged; error-severity issues fail the load.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Self::base();

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            debug!("Loading configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::finish(figment)
    }

    /// Load configuration from a TOML string, ignoring the environment
    pub fn load_str(toml: &str) -> Result<FileConfig, ConfigError> {
        Self::finish(Self::base().merge(Toml::string(toml)))
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn finish(figment: Figment) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;

        let mut errors = Vec::new();
        for issue in config.validate() {
            if issue.is_error() {
                errors.push(issue.to_string());
            } else {
                warn!("Configuration: {}", issue);
            }
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

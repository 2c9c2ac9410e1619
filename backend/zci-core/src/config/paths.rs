//! Platform-aware detection of the dda config directory.
//!
//! Lookup order:
//! 1. DDA_CONFIG_DIR environment variable (explicit override)
//! 2. Platform config directory via `dirs` crate
//! 3. `$HOME/.config/dda`

use crate::config::CONFIG_FILE_NAME;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};

pub const ENV_CONFIG_DIR: &str = "DDA_CONFIG_DIR";
const APP_DIR_NAME: &str = "dda";

/// Config directory detection result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub source: PathSource,
}

/// How the path was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    EnvVar,
    PlatformDefault,
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{ENV_CONFIG_DIR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home fallback"),
        }
    }
}

impl ConfigPaths {
    fn new(config_dir: PathBuf, source: PathSource) -> Self {
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self {
            config_dir,
            config_file,
            source,
        }
    }
}

/// Detect where `config.toml` lives.
///
/// # Errors
/// Returns `ConfigError::DirectoryNotFound` if no candidate can be determined.
#[track_caller]
pub fn detect_config_paths() -> Result<ConfigPaths, ConfigError> {
    if let Ok(custom_dir) = env::var(ENV_CONFIG_DIR)
        && !custom_dir.trim().is_empty()
    {
        info!("Using {ENV_CONFIG_DIR} override: {custom_dir}");
        return Ok(ConfigPaths::new(
            PathBuf::from(custom_dir),
            PathSource::EnvVar,
        ));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dda_dir = config_dir.join(APP_DIR_NAME);
        debug!("Platform config dir: {:?}", dda_dir);
        return Ok(ConfigPaths::new(dda_dir, PathSource::PlatformDefault));
    }

    if let Some(home) = dirs::home_dir() {
        let dda_dir = home.join(".config").join(APP_DIR_NAME);
        warn!("Using home fallback config path: {:?}", dda_dir);
        return Ok(ConfigPaths::new(dda_dir, PathSource::HomeFallback));
    }

    Err(ConfigError::DirectoryNotFound {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("Cannot determine config directory. Set {ENV_CONFIG_DIR}."),
    })
}

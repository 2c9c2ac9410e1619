pub mod env;
pub mod paths;

pub use paths::{ConfigPaths, PathSource, detect_config_paths};

use crate::error::config::ConfigError;
use crate::query::QueryOptions;
use crate::resolver::{DEFAULT_PRIORITY, Resolver, Selector};
use crate::zci_client::ZciOptions;
use crate::{DDG_API_BASE_URL, NO_RESULTS_SENTINEL, USER_AGENT};

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ENV_BASE_URL: &str = "DDA_BASE_URL";

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerConfig {
    /// Selectors in textual form, e.g. `related.0`.
    #[serde(default = "default_priority")]
    pub priority: Vec<String>,
    #[serde(default = "default_true")]
    pub urls: bool,
    #[serde(default = "default_true")]
    pub web_fallback: bool,
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            urls: default_true(),
            web_fallback: default_true(),
            sentinel: default_sentinel(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DdaConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub query: QueryOptions,

    #[serde(default)]
    pub answer: AnswerConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_base_url() -> String {
    DDG_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    USER_AGENT.to_string()
}
fn default_priority() -> Vec<String> {
    DEFAULT_PRIORITY.iter().map(Selector::to_string).collect()
}
fn default_true() -> bool {
    true
}
fn default_sentinel() -> String {
    NO_RESULTS_SENTINEL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl DdaConfig {
    /// Load `.env`, locate the config directory and load from it.
    pub fn load_default() -> Result<Self, ConfigError> {
        env::load_dotenv();
        let paths = detect_config_paths()?;
        Self::load(&paths.config_dir)
    }

    /// Load `{config_dir}/config.toml`, then apply environment overrides.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file does not exist.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                warn!("Failed to read config file: {}", e);
                ConfigError::ReadError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    source: e,
                }
            })?;

            let config: DdaConfig = toml::from_str(&contents).map_err(|e| {
                warn!("Failed to parse config TOML: {}", e);
                ConfigError::ParseError {
                    location: ErrorLocation::from(Location::caller()),
                    path: config_path.clone(),
                    reason: e.to_string(),
                }
            })?;

            info!("Config loaded from {}", config_path.display());
            config
        } else {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply `DDA_BASE_URL` when set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(ENV_BASE_URL)
            && !base_url.trim().is_empty()
        {
            info!("Using {ENV_BASE_URL} override: {base_url}");
            self.api.base_url = base_url.trim().to_string();
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a bad URL or timeout and
    /// [`ConfigError::Selector`] for an unparseable priority entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid base_url '{}': {e}", self.api.base_url),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url scheme: {}", url.scheme()),
            });
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.api.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {} (must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS} seconds)",
                    self.api.timeout_secs
                ),
            });
        }

        if self.answer.priority.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("answer.priority cannot be empty"),
            });
        }

        Selector::parse_list(&self.answer.priority)?;

        Ok(())
    }

    /// Resolver described by the `[answer]` section.
    pub fn resolver(&self) -> Result<Resolver, ConfigError> {
        Ok(Resolver::from_names(&self.answer.priority)?
            .with_urls(self.answer.urls)
            .with_web_fallback(self.answer.web_fallback)
            .with_sentinel(self.answer.sentinel.clone()))
    }

    pub fn zci_options(&self) -> Result<ZciOptions, ConfigError> {
        Ok(ZciOptions {
            query: self.query.clone(),
            resolver: self.resolver()?,
        })
    }
}

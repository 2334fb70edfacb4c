use crate::domain::Chain;
use crate::shared::constants::{
    CONFIG_FILE_ENV, DEFAULT_CHAIN, DEFAULT_CHAIN_ENV, DEFAULT_REQUEST_TIMEOUT_SECS, LOG_LEVEL_ENV,
    RPC_OVERRIDE_ENV_PREFIX, TIMEOUT_ENV,
};
use crate::shared::error::InspectorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InspectorConfig {
    pub default_chain: Chain,
    pub request_timeout_secs: u64,
    pub log_level: String,
    /// Per-chain RPC endpoints replacing the compiled-in ones.
    pub rpc_overrides: BTreeMap<Chain, String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            default_chain: DEFAULT_CHAIN,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: "info".to_string(),
            rpc_overrides: BTreeMap::new(),
        }
    }
}

impl InspectorConfig {
    pub fn new() -> Result<Self, InspectorError> {
        // Load environment variables
        dotenv::dotenv().ok();

        let config = match env::var(CONFIG_FILE_ENV) {
            Ok(path) if Path::new(&path).exists() => Self::load_from_file(&path)?,
            Ok(path) => {
                log::warn!("Config file {} not found, falling back to environment", path);
                Self::from_env()?
            }
            Err(_) => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, InspectorError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    /// for missing or empty values.
    pub fn from_source<F>(lookup: F) -> Result<Self, InspectorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_chain = match Self::get_or_fallback(&lookup, DEFAULT_CHAIN_ENV) {
            Some(value) => value.parse::<Chain>()?,
            None => defaults.default_chain,
        };

        let request_timeout_secs = match Self::get_or_fallback(&lookup, TIMEOUT_ENV) {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                InspectorError::config(format!("Invalid {} '{}': {}", TIMEOUT_ENV, value, e))
            })?,
            None => defaults.request_timeout_secs,
        };

        let log_level = Self::get_or_fallback(&lookup, LOG_LEVEL_ENV)
            .map(|level| level.to_lowercase())
            .unwrap_or(defaults.log_level);

        let rpc_overrides = Chain::ALL
            .into_iter()
            .filter_map(|chain| {
                Self::get_or_fallback(&lookup, &Self::override_key(chain)).map(|url| (chain, url))
            })
            .collect();

        Ok(Self {
            default_chain,
            request_timeout_secs,
            log_level,
            rpc_overrides,
        })
    }

    /// Environment key for a chain's RPC override, e.g. `CHAINSCOPE_RPC_BASE`.
    pub fn override_key(chain: Chain) -> String {
        format!("{}{}", RPC_OVERRIDE_ENV_PREFIX, chain.identifier())
    }

    fn get_or_fallback<F>(lookup: &F, key: &str) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(key).filter(|value| !value.trim().is_empty())
    }

    pub fn load_from_file(path: &str) -> Result<Self, InspectorError> {
        let content = fs::read_to_string(path)
            .map_err(|e| InspectorError::config(format!("Failed to read config file {}: {}", path, e)))?;
        let config: InspectorConfig = serde_json::from_str(&content)
            .map_err(|e| InspectorError::config(format!("Failed to deserialize config: {}", e)))?;
        log::debug!("Loaded configuration from {}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), InspectorError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| InspectorError::config(format!("Failed to write config file {}: {}", path, e)))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), InspectorError> {
        if self.request_timeout_secs == 0 {
            return Err(InspectorError::config("Request timeout must be greater than zero"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(InspectorError::config(format!(
                "Invalid log level '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        for (chain, url) in &self.rpc_overrides {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(InspectorError::config(format!(
                    "Invalid RPC URL for {}: '{}'. Expected an http(s) URL",
                    chain, url
                )));
            }
        }

        Ok(())
    }

    /// Endpoint the inspector should use for `chain`.
    pub fn endpoint_for(&self, chain: Chain) -> &str {
        self.rpc_overrides
            .get(&chain)
            .map(String::as_str)
            .unwrap_or_else(|| chain.rpc_url())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

use crate::domain::Chain;
use crate::shared::error::InspectorError;
use log::{debug, info, warn, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub enable_timestamps: bool,
    pub enable_module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_timestamps: true,
            enable_module_path: false,
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn init(log_level: &str) {
        Self::init_with(LogConfig {
            level: log_level.to_string(),
            ..LogConfig::default()
        });
    }

    /// Install the global logger once. `RUST_LOG` takes precedence over the
    /// configured level.
    pub fn init_with(config: LogConfig) {
        INIT.call_once(|| {
            let mut builder = env_logger::Builder::new();
            builder
                .filter_level(Self::parse_level(&config.level))
                .format_module_path(config.enable_module_path)
                .parse_env(env_logger::Env::default());

            if !config.enable_timestamps {
                builder.format_timestamp(None);
            }

            if let Err(e) = builder.try_init() {
                eprintln!("Failed to initialize logger: {e}");
            }
        });
    }

    pub fn parse_level(level: &str) -> LevelFilter {
        match level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }

    pub fn chain_bound(chain: Chain, endpoint: &str) {
        info!("Bound to {} (chain id {}) via {}", chain, chain.chain_id(), endpoint);
    }

    pub fn chain_switch_failed(chain: Chain, error: &InspectorError) {
        warn!("Keeping previous binding, could not bind {}: {}", chain, error);
    }

    pub fn query_degraded(chain: Chain, query: &str, error: &InspectorError) {
        warn!("{} query on {} degraded: {}", query, chain, error);
    }

    pub fn token_skipped(chain: Chain, symbol: &str) {
        debug!("No {} contract on {}, skipping token query", symbol, chain);
    }

    pub fn audit_completed(address: &str, chains: usize, failures: usize) {
        info!("Audit of {} finished: {} chains, {} degraded", address, chains, failures);
    }
}

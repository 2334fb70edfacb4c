//! Chainscope Core
//!
//! Multi-chain balance inspector for EVM networks.
//! Reads an address's native coin and USDC balances on Base, Polygon, BNB Smart
//! Chain, Ethereum and Arbitrum and normalizes them into display strings.
//!
//! ## Architecture
//!
//! - **Core**: chain registry, network client seam, balance inspector
//! - **Domain**: chain and token entities
//! - **Infrastructure**: configuration and logging
//! - **Shared**: common types, constants, errors and utilities
//!
//! ## Usage
//!
//! ```no_run
//! use chainscope_core::init_inspector;
//!
//! # async fn run() -> Result<(), chainscope_core::InspectorError> {
//! let inspector = init_inspector()?;
//! let inspection = inspector
//!     .inspect("BASE", "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6")
//!     .await?;
//! println!("{}", inspection);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export specific components
pub use crate::core::registry;
pub use crate::core::{BalanceInspector, ChainClient, ClientFactory, EthersClient, EthersClientFactory};

// Re-export domain entities
pub use crate::domain::{Chain, Token};

pub use crate::infrastructure::{InspectorConfig, LogConfig, Logger};

// Re-export shared types
pub use crate::shared::error::{AddressError, ClientError, InspectorError};
pub use crate::shared::types::{
    BalanceReading, InspectorResult, InspectorState, Inspection, NativeBalance, TokenBalance,
};
pub use crate::shared::utils::{format_units_rounded, validate_address};

/// Load configuration from .env, file or environment and initialize logging.
pub fn init() -> Result<InspectorConfig, InspectorError> {
    let config = InspectorConfig::new()?;
    Logger::init(&config.log_level);
    Ok(config)
}

/// Initialize logging and build an inspector bound to the configured default chain.
pub fn init_inspector() -> Result<BalanceInspector<EthersClientFactory>, InspectorError> {
    let config = init()?;
    BalanceInspector::from_config(config)
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

//! Infrastructure layer
//!
//! Configuration loading and logger setup.

pub mod config;
pub mod logger;

pub use config::InspectorConfig;
pub use logger::{LogConfig, Logger};

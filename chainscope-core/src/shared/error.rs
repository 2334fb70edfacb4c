//! Error handling for the inspector
//!
//! This module defines the error types used throughout the inspector.
//! Only `UnknownChain` and `InvalidAddress` are expected on the normal
//! inspection path; client failures are downgraded to display sentinels by
//! the `fetch_*` functions and only surface through the `try_*` variants.

use std::time::Duration;
use thiserror::Error;

/// Inspector error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Format error: {0}")]
    Format(String),
}

impl InspectorError {
    /// Create an unknown chain error
    pub fn unknown_chain(identifier: impl Into<String>) -> Self {
        Self::UnknownChain(identifier.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// True for the two input errors that are reported before any network access.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnknownChain(_) | Self::InvalidAddress(_))
    }
}

/// Malformed address input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be 42 characters long, got {0}")]
    InvalidLength(usize),

    #[error("address contains invalid hex character {0:?}")]
    InvalidCharacter(char),
}

/// Failure of a single query against an RPC endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Contract call error: {0}")]
    Contract(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a contract call error
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for InspectorError {
    fn from(err: std::io::Error) -> Self {
        Self::config(format!("IO error: {}", err))
    }
}

impl From<ethers::providers::ProviderError> for ClientError {
    fn from(err: ethers::providers::ProviderError) -> Self {
        Self::network(err.to_string())
    }
}

impl From<ethers::abi::Error> for ClientError {
    fn from(err: ethers::abi::Error) -> Self {
        Self::decode(err.to_string())
    }
}

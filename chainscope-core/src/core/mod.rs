//! Core inspector functionality
//!
//! This module contains the chain registry, the network client seam and the
//! balance inspector built on top of them.

pub mod client;
pub mod inspector;
pub mod registry;

pub use client::{ChainClient, ClientFactory, EthersClient, EthersClientFactory};
pub use inspector::BalanceInspector;

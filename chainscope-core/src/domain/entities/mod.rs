//! Domain entities and value objects
//!
//! This module contains the chain and token entities the registry and the
//! inspector are built on.

pub mod chain;
pub mod token;

// Re-export entities
pub use chain::*;
pub use token::*;

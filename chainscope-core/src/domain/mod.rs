//! Domain layer - entities
//!
//! This module contains the chains and tokens the inspector knows about.

pub mod entities;

// Re-export domain components
pub use entities::*;

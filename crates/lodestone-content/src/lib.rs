//! Lodestone Content -- the startup-assembled registry set.
//!
//! This crate wires the registries from [`lodestone_registry`] into a single
//! [`Registries`](registries::Registries) value that the rest of a server
//! receives by reference, together with its configuration and the block-state
//! catalog that block finalization reads.
//!
//! # Modules
//!
//! - [`config`]: [`RegistryConfig`](config::RegistryConfig), deserializable
//!   startup settings.
//! - [`state`]: block states and their sequential state ids.
//! - [`registries`]: the container and its load-phase operations.

#![deny(unsafe_code)]

pub mod config;
pub mod registries;
pub mod state;

/// Re-export the registry crate for convenience.
pub use lodestone_registry;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while assembling the registry set.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] lodestone_registry::RegistryError),

    /// Every block-state id is already taken.
    #[error("block-state ids exhausted: {states} states already registered")]
    StateIdOverflow { states: usize },

    /// The configuration could not be parsed.
    #[error("invalid registry config: {0}")]
    Config(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use lodestone_registry::prelude::*;

    pub use crate::config::RegistryConfig;
    pub use crate::registries::Registries;
    pub use crate::state::{BlockState, BlockStateRegistry};
    pub use crate::ContentError;
}

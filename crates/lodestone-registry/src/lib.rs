//! Lodestone Registry -- key and protocol-id catalogs for items and blocks.
//!
//! This crate holds the two definition registries shared by the wire codec and
//! world storage:
//!
//! - [`ItemRegistry`](item::ItemRegistry): items addressed by string key and by
//!   a compact numeric protocol id bound after definition, with a settable
//!   fallback item for unbound ids.
//! - [`BlockRegistry`](block::BlockRegistry): blocks addressed by key only,
//!   derived once from the block-state catalog and then locked.
//!
//! Registries are plain values. Build them during startup with `&mut` access,
//! then share them read-only.
//!
//! # Quick Start
//!
//! ```
//! use lodestone_registry::prelude::*;
//!
//! let mut items = ItemRegistry::new();
//! items.register(Item::new("minecraft:bow").with_component(CompoundTag::new().with("max_stack", 1)));
//! items.bind_ids([("minecraft:air", 0), ("minecraft:bow", 3)]);
//! items.set_default_key("minecraft:air").unwrap();
//!
//! assert_eq!(items.by_id(3).unwrap().key(), "minecraft:bow");
//! assert_eq!(items.by_id(999).unwrap().key(), "minecraft:air");
//!
//! let mut blocks = BlockRegistry::new();
//! blocks.finish(["minecraft:stone", "minecraft:stone", "minecraft:dirt"]).unwrap();
//! assert_eq!(blocks.len(), 2);
//! assert!(blocks.finish(["minecraft:glass"]).is_err());
//! ```

#![deny(unsafe_code)]

pub mod block;
pub mod id_table;
pub mod item;
pub mod meta;
pub mod tag;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by registry operations.
///
/// Lookup misses are not errors; they surface as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A finalize-once registry was finalized a second time.
    #[error("{registry} registry is already finalized")]
    AlreadyFinalized { registry: &'static str },

    /// An operation referenced a key that was never registered.
    #[error("key '{key}' is not registered in the {registry} registry")]
    UnknownKey { registry: &'static str, key: String },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::block::{Block, BlockRegistry, Keyed};
    pub use crate::id_table::IdTable;
    pub use crate::item::{Item, ItemRegistry, UNASSIGNED_ID};
    pub use crate::meta::{DefaultMeta, DefaultMetaFactory, Meta, MetaFactory};
    pub use crate::tag::CompoundTag;
    pub use crate::RegistryError;
}

// ---------------------------------------------------------------------------
// Integration Tests
// ---------------------------------------------------------------------------

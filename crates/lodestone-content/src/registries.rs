//! The [`Registries`] container built once at startup.
//!
//! A server constructs one `Registries`, fills it while still single-threaded,
//! and then hands out `&Registries` (or an `Arc<Registries>`) to the codec and
//! world storage. Mutation requires `&mut`, so nothing can change the catalogs
//! once they are shared.
//!
//! # Example
//!
//! ```
//! use lodestone_content::prelude::*;
//!
//! let mut registries = Registries::new(RegistryConfig::default());
//! registries.states_mut().register(BlockState::new("minecraft:air")).unwrap();
//! registries.states_mut().register(BlockState::new("minecraft:stone")).unwrap();
//! registries.finish_blocks().unwrap();
//!
//! registries.items_mut().register(Item::new("minecraft:stick"));
//! registries
//!     .bind_item_ids([("minecraft:air", 0), ("minecraft:stick", 1)])
//!     .unwrap();
//!
//! assert_eq!(registries.items().by_id(77).unwrap().key(), "minecraft:air");
//! assert!(registries.blocks().by_key("minecraft:stone").is_some());
//! ```

use lodestone_registry::block::BlockRegistry;
use lodestone_registry::item::ItemRegistry;
use tracing::info;

use crate::config::RegistryConfig;
use crate::state::BlockStateRegistry;
use crate::ContentError;

/// Item, block, and block-state catalogs plus the config they were built with.
#[derive(Debug, Default)]
pub struct Registries {
    config: RegistryConfig,
    items: ItemRegistry,
    blocks: BlockRegistry,
    states: BlockStateRegistry,
}

impl Registries {
    /// Empty catalogs.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            items: ItemRegistry::new(),
            blocks: BlockRegistry::new(),
            states: BlockStateRegistry::new(),
        }
    }

    /// The config these registries were built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The item registry.
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// Mutable item registry, for the load phase.
    pub fn items_mut(&mut self) -> &mut ItemRegistry {
        &mut self.items
    }

    /// The block registry.
    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    /// The block-state catalog.
    pub fn states(&self) -> &BlockStateRegistry {
        &self.states
    }

    /// Mutable block-state catalog, for the load phase.
    pub fn states_mut(&mut self) -> &mut BlockStateRegistry {
        &mut self.states
    }

    /// Finalize the block registry from the current block-state catalog.
    ///
    /// Call once every state has been registered. Returns the number of
    /// blocks.
    pub fn finish_blocks(&mut self) -> Result<usize, ContentError> {
        let count = self.blocks.finish(self.states.all())?;
        info!(blocks = count, states = self.states.len(), "blocks derived from states");
        Ok(count)
    }

    /// Bind item protocol ids, then install the configured default item.
    ///
    /// Fails if the configured default item is not registered after binding.
    /// The bindings are applied either way.
    pub fn bind_item_ids<I, K>(&mut self, bindings: I) -> Result<usize, ContentError>
    where
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let count = self.items.bind_ids(bindings);
        if let Some(key) = &self.config.default_item {
            self.items.set_default_key(key)?;
        }
        info!(items = count, "item ids bound");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BlockState;
    use lodestone_registry::RegistryError;

    #[test]
    fn finish_blocks_uses_state_catalog() {
        let mut registries = Registries::default();
        for axis in ["x", "y", "z"] {
            registries
                .states_mut()
                .register(BlockState::new("oak_log").with_property("axis", axis))
                .unwrap();
        }
        registries.states_mut().register(BlockState::new("stone")).unwrap();

        assert_eq!(registries.finish_blocks().unwrap(), 2);
        assert_eq!(registries.states().len(), 4);
        assert!(matches!(
            registries.finish_blocks(),
            Err(ContentError::Registry(RegistryError::AlreadyFinalized { .. }))
        ));
    }

    #[test]
    fn missing_default_item_is_reported() {
        let mut registries = Registries::new(RegistryConfig {
            default_item: Some("minecraft:air".to_owned()),
        });
        let err = registries.bind_item_ids([("minecraft:stone", 1)]).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Registry(RegistryError::UnknownKey { .. })
        ));
        // Bindings still applied.
        assert_eq!(registries.items().by_id(1).unwrap().key(), "minecraft:stone");
        assert!(registries.items().by_id(2).is_none());
    }

    #[test]
    fn no_default_configured_leaves_misses() {
        let mut registries = Registries::new(RegistryConfig { default_item: None });
        registries.bind_item_ids([("minecraft:air", 0)]).unwrap();
        assert!(registries.items().by_id(5).is_none());
    }
}

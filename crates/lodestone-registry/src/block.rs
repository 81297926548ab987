//! Block definitions and the finalize-once [`BlockRegistry`].
//!
//! Blocks have no numeric id of their own; the protocol addresses block
//! *states* instead. The set of block keys is derived once from the complete
//! block-state catalog by [`BlockRegistry::finish`] and never rebuilt.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use tracing::{info, warn};

use crate::tag::CompoundTag;
use crate::RegistryError;

// ---------------------------------------------------------------------------
// Keyed
// ---------------------------------------------------------------------------

/// Anything that names the block it belongs to.
///
/// Implemented by block states so [`BlockRegistry::finish`] can collect the
/// distinct block keys.
pub trait Keyed {
    /// Key of the block this value belongs to.
    fn key(&self) -> &str;
}

impl Keyed for str {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A registered block type. Equality and hashing use the key.
#[derive(Debug, Clone)]
pub struct Block {
    key: String,
    component: Option<CompoundTag>,
}

impl Block {
    /// A block with no component data.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component: None,
        }
    }

    /// Attach component data. Builder-style.
    pub fn with_component(mut self, component: CompoundTag) -> Self {
        self.component = Some(component);
        self
    }

    /// The block's registry key, e.g. `"minecraft:stone"`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Component data attached at construction, if any.
    pub fn component(&self) -> Option<&CompoundTag> {
        self.component.as_ref()
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Keyed for Block {
    fn key(&self) -> &str {
        &self.key
    }
}

// ---------------------------------------------------------------------------
// BlockRegistry
// ---------------------------------------------------------------------------

/// Key -> block catalog, empty until [`finish`](Self::finish) succeeds.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    by_key: HashMap<String, Block>,
    finalized: bool,
}

impl BlockRegistry {
    /// Create an empty, unfinalized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from every block state, one block per distinct key.
    ///
    /// Fails with [`RegistryError::AlreadyFinalized`] on any call after the
    /// first successful one, leaving the catalog untouched. Returns the number
    /// of blocks created.
    pub fn finish<'a, S, I>(&mut self, states: I) -> Result<usize, RegistryError>
    where
        S: Keyed + ?Sized + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        if self.finalized {
            warn!("block registry finish called twice");
            return Err(RegistryError::AlreadyFinalized { registry: "block" });
        }

        let keys: HashSet<&str> = states.into_iter().map(Keyed::key).collect();
        let by_key: HashMap<String, Block> = keys
            .into_iter()
            .map(|key| (key.to_owned(), Block::new(key)))
            .collect();

        let count = by_key.len();
        self.by_key = by_key;
        self.finalized = true;
        info!(blocks = count, "block registry finalized");
        Ok(count)
    }

    /// Whether [`finish`](Self::finish) has succeeded.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The block for `key`, or `None` if unknown or not yet finalized.
    pub fn by_key(&self, key: &str) -> Option<&Block> {
        self.by_key.get(key)
    }

    /// Every registered block. Order is unspecified but does not change once
    /// finalized; the iterator is `Clone` for repeated walks.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Block> + Clone + '_ {
        self.by_key.values()
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether no blocks are registered.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

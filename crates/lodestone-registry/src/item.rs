//! Item definitions and the id-addressable [`ItemRegistry`].
//!
//! Items are registered in two phases. Rich definitions (custom metadata
//! factory, component data) are registered first with
//! [`ItemRegistry::register`]. Later an id-table loader binds compact numeric
//! protocol ids with [`ItemRegistry::register_id`], creating bare items for any
//! key that was never defined explicitly.
//!
//! The registry owns every item in slot storage. Both indexes refer to slots,
//! so a lookup by key and a lookup by id return the very same `&Item` once the
//! id is bound.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::id_table::IdTable;
use crate::meta::{DefaultMetaFactory, Meta, MetaFactory};
use crate::tag::CompoundTag;
use crate::RegistryError;

/// The id every item carries until it is bound by [`ItemRegistry::register_id`].
pub const UNASSIGNED_ID: i32 = 0;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A registered item type, e.g. `"minecraft:diamond_sword"`.
///
/// Equality and hashing use the numeric id only. Two items that were never
/// bound both have id [`UNASSIGNED_ID`] and therefore compare equal, even with
/// different keys.
#[derive(Clone)]
pub struct Item {
    key: String,
    id: i32,
    component: Option<CompoundTag>,
    meta_factory: Arc<dyn MetaFactory>,
}

impl Item {
    /// A bare item with no component and the [`DefaultMetaFactory`].
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            id: UNASSIGNED_ID,
            component: None,
            meta_factory: Arc::new(DefaultMetaFactory),
        }
    }

    /// Attach component data. Builder-style.
    pub fn with_component(mut self, component: CompoundTag) -> Self {
        self.component = Some(component);
        self
    }

    /// Replace the metadata factory. Builder-style.
    pub fn with_meta_factory(mut self, factory: impl MetaFactory + 'static) -> Self {
        self.meta_factory = Arc::new(factory);
        self
    }

    /// The item's registry key, e.g. `"minecraft:stick"`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The bound protocol id, or [`UNASSIGNED_ID`].
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Component data attached at construction, if any.
    pub fn component(&self) -> Option<&CompoundTag> {
        self.component.as_ref()
    }

    /// Build a fresh metadata instance. Never cached.
    pub fn create_meta(&self) -> Box<dyn Meta> {
        self.meta_factory.create()
    }

    /// Build a fresh metadata instance and downcast it to `T`.
    ///
    /// Returns `None` if this item's factory produces a different type.
    pub fn create_meta_as<T: Meta>(&self) -> Option<Box<T>> {
        self.create_meta().into_any().downcast::<T>().ok()
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("key", &self.key)
            .field("id", &self.id)
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// ItemRegistry
// ---------------------------------------------------------------------------

/// Key -> item and id -> item catalog, plus a settable fallback for unbound ids.
///
/// No key or id is ever removed. Re-registering a key, or binding an id that already
/// belongs to another item, silently replaces the previous index entry.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    /// Item slots, including the default. A slot is only overwritten once
    /// neither index nor the default refers to it.
    items: Vec<Item>,
    /// Key -> slot in `items`.
    by_key: HashMap<String, usize>,
    /// Id -> slot in `items`. Ordered so iteration is deterministic.
    by_id: BTreeMap<i32, usize>,
    /// Slot returned by [`by_id`](Self::by_id) for ids with no binding.
    default: Option<usize>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` under its key, replacing any previous definition.
    ///
    /// No id is assigned: the item is stored unbound whatever id it carried.
    /// A replaced item that is still id-bound or the default keeps its slot;
    /// otherwise the new definition takes the slot over.
    pub fn register(&mut self, mut item: Item) {
        item.id = UNASSIGNED_ID;
        match self.by_key.get(&item.key).copied() {
            Some(previous) if !self.is_id_bound(previous) && self.default != Some(previous) => {
                debug!(key = %item.key, slot = previous, "item key re-registered, reusing slot");
                self.items[previous] = item;
            }
            Some(previous) => {
                debug!(
                    key = %item.key,
                    previous_slot = previous,
                    "item key re-registered, replacing previous definition"
                );
                let slot = self.push(item);
                self.by_key.insert(self.items[slot].key.clone(), slot);
            }
            None => {
                trace!(key = %item.key, "item registered");
                let slot = self.push(item);
                self.by_key.insert(self.items[slot].key.clone(), slot);
            }
        }
    }

    /// Bind `key` to the protocol id `id`.
    ///
    /// If `key` is unknown a bare [`Item`] is created for it first. An existing
    /// item is reused and its id is rewritten in place; its previous id binding
    /// is dropped.
    pub fn register_id(&mut self, key: &str, id: i32) {
        let slot = match self.by_key.get(key) {
            Some(&slot) => slot,
            None => {
                let slot = self.push(Item::new(key));
                self.by_key.insert(key.to_owned(), slot);
                trace!(key, "bare item created for id binding");
                slot
            }
        };

        let previous = std::mem::replace(&mut self.items[slot].id, id);
        if previous != id && self.by_id.get(&previous) == Some(&slot) {
            self.by_id.remove(&previous);
            debug!(key, previous, id, "item id rebound");
        }

        if let Some(displaced) = self.by_id.insert(id, slot) {
            if displaced != slot {
                debug!(
                    key,
                    id,
                    displaced = %self.items[displaced].key,
                    "id was bound to another item, replacing"
                );
            }
        }
    }

    /// Apply [`register_id`](Self::register_id) for every `(key, id)` pair.
    ///
    /// Returns the number of bindings applied.
    pub fn bind_ids<I, K>(&mut self, bindings: I) -> usize
    where
        I: IntoIterator<Item = (K, i32)>,
        K: AsRef<str>,
    {
        let mut count = 0;
        for (key, id) in bindings {
            self.register_id(key.as_ref(), id);
            count += 1;
        }
        debug!(count, bound = self.by_id.len(), "item ids bound");
        count
    }

    /// The item bound to `id`, or the default item if `id` is unbound.
    pub fn by_id(&self, id: i32) -> Option<&Item> {
        self.by_id
            .get(&id)
            .or(self.default.as_ref())
            .map(|&slot| &self.items[slot])
    }

    /// The item registered under `key`, bound or not.
    pub fn by_key(&self, key: &str) -> Option<&Item> {
        self.by_key.get(key).map(|&slot| &self.items[slot])
    }

    /// Whether an item is registered under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Every id-bound item, in ascending id order.
    ///
    /// Items that were registered but never bound are not included. The
    /// returned iterator is `Clone`, so the view can be walked more than once.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &Item> + Clone + '_ {
        self.by_id.values().map(move |&slot| &self.items[slot])
    }

    /// Keys of every registered item, bound or not. Order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_key.keys().map(String::as_str)
    }

    /// The fallback returned by [`by_id`](Self::by_id) for unbound ids.
    pub fn default_item(&self) -> Option<&Item> {
        self.default.map(|slot| &self.items[slot])
    }

    /// Install `item` as the fallback for unbound ids.
    ///
    /// The item is owned by the registry but not indexed by key or id. It
    /// overwrites the previous default in place unless that one is indexed.
    pub fn set_default(&mut self, item: Item) {
        debug!(key = %item.key, "default item set");
        match self.default {
            Some(slot) if !self.is_indexed(slot) => self.items[slot] = item,
            _ => self.default = Some(self.push(item)),
        }
    }

    /// Use the already-registered item under `key` as the fallback.
    pub fn set_default_key(&mut self, key: &str) -> Result<(), RegistryError> {
        let slot = *self
            .by_key
            .get(key)
            .ok_or_else(|| RegistryError::UnknownKey {
                registry: "item",
                key: key.to_owned(),
            })?;
        self.default = Some(slot);
        debug!(key, "default item set");
        Ok(())
    }

    /// Number of item slots held, including replaced definitions that are
    /// still id-bound and an unindexed default.
    pub fn storage_len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Whether the id index points at `slot`. A slot can only be indexed
    /// under the id it carries.
    fn is_id_bound(&self, slot: usize) -> bool {
        self.by_id.get(&self.items[slot].id) == Some(&slot)
    }

    fn is_indexed(&self, slot: usize) -> bool {
        self.is_id_bound(slot) || self.by_key.get(&self.items[slot].key) == Some(&slot)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether no key has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Snapshot of the id -> key bindings.
    pub fn id_table(&self) -> IdTable {
        self.by_id
            .iter()
            .map(|(&id, &slot)| (id, self.items[slot].key.clone()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

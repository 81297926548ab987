//! Block-state catalog consumed by block finalization.
//!
//! Every distinct combination of a block's properties is its own state with a
//! sequential numeric state id, which is what the protocol actually transmits.
//! The block registry only needs the owning block key of each state.

use std::collections::BTreeMap;

use lodestone_registry::block::Keyed;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ContentError;

// ---------------------------------------------------------------------------
// BlockState
// ---------------------------------------------------------------------------

/// One concrete state of a block, e.g. `oak_log[axis=y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    /// Key of the owning block.
    pub block: String,
    /// Property name -> value. Empty for blocks without properties.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl BlockState {
    /// A state with no properties.
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property. Builder-style.
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl Keyed for BlockState {
    fn key(&self) -> &str {
        &self.block
    }
}

// ---------------------------------------------------------------------------
// BlockStateRegistry
// ---------------------------------------------------------------------------

/// Append-only list of block states. A state's id is its position.
#[derive(Debug, Default)]
pub struct BlockStateRegistry {
    states: Vec<BlockState>,
}

impl BlockStateRegistry {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `state` and return its state id.
    ///
    /// Fails with [`ContentError::StateIdOverflow`] once every `u32` id is
    /// taken; the state is not added.
    pub fn register(&mut self, state: BlockState) -> Result<u32, ContentError> {
        let id = next_state_id(self.states.len())?;
        trace!(block = %state.block, id, "block state registered");
        self.states.push(state);
        Ok(id)
    }

    /// The state with id `id`, if registered.
    pub fn by_state_id(&self, id: u32) -> Option<&BlockState> {
        self.states.get(id as usize)
    }

    /// Every state in id order.
    pub fn all(&self) -> &[BlockState] {
        &self.states
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no states are registered.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// The id the state at position `len` receives.
fn next_state_id(len: usize) -> Result<u32, ContentError> {
    u32::try_from(len).map_err(|_| ContentError::StateIdOverflow { states: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_ids_are_sequential() {
        let mut states = BlockStateRegistry::new();
        assert_eq!(states.register(BlockState::new("air")).unwrap(), 0);
        assert_eq!(
            states
                .register(BlockState::new("oak_log").with_property("axis", "x"))
                .unwrap(),
            1
        );
        assert_eq!(
            states
                .register(BlockState::new("oak_log").with_property("axis", "y"))
                .unwrap(),
            2
        );
        assert_eq!(states.by_state_id(2).unwrap().properties["axis"], "y");
        assert!(states.by_state_id(3).is_none());
        assert_eq!(states.all().len(), 3);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn state_ids_stop_at_u32_max() {
        let last = u32::MAX as usize;
        assert_eq!(next_state_id(last).unwrap(), u32::MAX);
        assert!(matches!(
            next_state_id(last + 1),
            Err(ContentError::StateIdOverflow { states }) if states == last + 1
        ));
    }

    #[test]
    fn state_key_is_owning_block() {
        let state = BlockState::new("oak_log").with_property("axis", "z");
        assert_eq!(Keyed::key(&state), "oak_log");
    }
}

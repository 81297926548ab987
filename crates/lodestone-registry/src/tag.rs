//! Opaque structured data attached to items and blocks at construction.

use serde::{Deserialize, Serialize};

/// A named-field compound value carried alongside an entity definition.
///
/// The registry never interprets the contents; it stores the tag and hands it
/// back unchanged. Serialization is transparent so a tag round-trips as a plain
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundTag(serde_json::Map<String, serde_json::Value>);

impl CompoundTag {
    /// Create an empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(name.to_owned(), value.into());
        self
    }

    /// The value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tag has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for CompoundTag {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_serializes_as_plain_object() {
        let tag = CompoundTag::new().with("max_stack", 16).with("rarity", "epic");
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json, serde_json::json!({"max_stack": 16, "rarity": "epic"}));
        assert_eq!(tag.get("max_stack"), Some(&serde_json::json!(16)));
        assert_eq!(tag.len(), 2);
    }
}

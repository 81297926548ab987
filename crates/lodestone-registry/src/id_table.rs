//! Exported id -> key bindings of an [`ItemRegistry`](crate::item::ItemRegistry).
//!
//! Clients and servers must agree on every protocol id. An [`IdTable`] captures
//! the bindings in id order and can be reduced to a BLAKE3 fingerprint, so two
//! processes can compare their assignment without exchanging the full table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered id -> key bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdTable(BTreeMap<i32, String>);

impl IdTable {
    /// The key bound to `id`.
    pub fn get(&self, id: i32) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bindings in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> + '_ {
        self.0.iter().map(|(&id, key)| (id, key.as_str()))
    }

    /// BLAKE3 hex digest over every `(id, key)` binding in id order.
    ///
    /// Keys are length-prefixed so adjacent bindings cannot alias.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (id, key) in &self.0 {
            hasher.update(&id.to_le_bytes());
            hasher.update(&(key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl FromIterator<(i32, String)> for IdTable {
    fn from_iter<I: IntoIterator<Item = (i32, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(i32, &str)]) -> IdTable {
        pairs.iter().map(|&(id, key)| (id, key.to_owned())).collect()
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let a = table(&[(0, "air"), (1, "stone")]);
        let b = table(&[(1, "stone"), (0, "air")]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn fingerprint_detects_swapped_ids() {
        let a = table(&[(0, "air"), (1, "stone")]);
        let b = table(&[(0, "stone"), (1, "air")]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn serializes_as_json_object() {
        let t = table(&[(2, "dirt"), (1, "stone")]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"1":"stone","2":"dirt"}"#);
        let back: IdTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.iter().next(), Some((1, "stone")));
    }
}

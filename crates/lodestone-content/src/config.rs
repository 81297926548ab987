//! Startup configuration for [`Registries`](crate::registries::Registries).

use serde::{Deserialize, Serialize};

use crate::ContentError;

/// Registry configuration.
///
/// Deserializable so a host can embed it in its own config file; every field
/// has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Item key returned for unbound protocol ids once ids are bound.
    /// `None` leaves unbound ids resolving to nothing.
    pub default_item: Option<String>,
}

impl Default for RegistryConfig {
    /// Defaults to `minecraft:air` as the fallback item.
    fn default() -> Self {
        Self {
            default_item: Some("minecraft:air".to_owned()),
        }
    }
}

impl RegistryConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

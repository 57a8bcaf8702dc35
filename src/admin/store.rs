//! In-memory config store — the source of truth for field placement.

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ValidationError;

use super::model::default_layout;

/// Holds the current ordered list of field assignments.
///
/// Entries are raw JSON values: replacement accepts any array and performs
/// no per-item validation, so whatever shape an admin posts survives a read
/// round trip unchanged. Parsing into [`super::model::FieldAssignment`]
/// happens on the client side. State lives for the process lifetime only.
pub struct ConfigStore {
    entries: RwLock<Vec<Value>>,
}

impl ConfigStore {
    /// Create a store seeded with the default layout.
    pub fn new() -> Self {
        let seed = default_layout()
            .into_iter()
            .map(|a| serde_json::json!({"component": a.component, "page": a.page}))
            .collect();
        Self::with_entries(seed)
    }

    /// Create a store with explicit initial entries.
    pub fn with_entries(entries: Vec<Value>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Current ordered sequence of entries.
    pub async fn get(&self) -> Vec<Value> {
        self.entries.read().await.clone()
    }

    /// Replace the whole stored sequence.
    ///
    /// The only check is that the payload is an array; items are taken
    /// as-is. There is no merge: prior entries are gone after this returns.
    pub async fn replace(&self, payload: Value) -> Result<(), ValidationError> {
        let Value::Array(new_entries) = payload else {
            return Err(ValidationError::NotAnArray);
        };

        let mut entries = self.entries.write().await;
        *entries = new_entries;
        info!(entries = entries.len(), "Config replaced");
        Ok(())
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

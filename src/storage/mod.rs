pub mod json_store;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over key-value backends holding user preferences.
///
/// Values are raw strings, never JSON-wrapped; keys are flat. The finance
/// core only ever touches one key, but the contract is generic so the same
/// backend can carry other preferences.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|_| StorageError::Invalid("preference map lock poisoned".into()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Invalid("preference map lock poisoned".into()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub use json_store::{JsonFileStore, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("selectedCurrency").unwrap(), None);
        store.set_item("selectedCurrency", "EUR").unwrap();
        assert_eq!(
            store.get_item("selectedCurrency").unwrap(),
            Some("EUR".to_string())
        );
    }
}

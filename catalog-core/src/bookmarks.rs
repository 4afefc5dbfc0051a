use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;

/// Persisted slot holding the bookmarked global ids.
pub const BOOKMARKS_KEY: &str = "bookmarkedVideos";

/// String key/value storage the bookmark set persists through. The
/// frontend backs this with localStorage; tests use [`MemoryStorage`].
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError>;
}

/// The set of bookmarked videos, keyed by global id so the same video
/// bookmarked from two category pages resolves to one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSet {
    ids: HashSet<usize>,
}

impl BookmarkSet {
    /// Loads the persisted set. An absent or corrupt slot yields an empty
    /// set, never an error.
    pub fn load(store: &dyn StoragePort) -> Self {
        let ids = store
            .get(BOOKMARKS_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<usize>>(&raw).ok())
            .unwrap_or_default()
            .into_iter()
            .collect();
        Self { ids }
    }

    pub fn is_bookmarked(&self, global_id: usize) -> bool {
        self.ids.contains(&global_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Toggles the bookmark for `local_index` within a category mapped by
    /// `offset`, then rewrites the persisted slot. On a write failure the
    /// error propagates and the in-memory set keeps its new membership
    /// only if the write succeeded (the caller drops the mutation).
    pub fn toggle(
        &mut self,
        local_index: usize,
        offset: usize,
        store: &dyn StoragePort,
    ) -> Result<(), CatalogError> {
        let global_id = local_index + offset;
        if !self.ids.remove(&global_id) {
            self.ids.insert(global_id);
        }
        self.persist(store)
    }

    fn persist(&self, store: &dyn StoragePort) -> Result<(), CatalogError> {
        let mut ids: Vec<usize> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        let encoded = serde_json::to_string(&ids)
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        store.set(BOOKMARKS_KEY, &encoded)
    }
}

/// In-memory storage port, for tests and environments without a browser
/// storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

use std::rc::Rc;

use catalog_core::bookmarks::{MemoryStorage, StoragePort};
use catalog_core::error::CatalogError;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// localStorage-backed implementation of the bookmark storage port.
#[derive(Clone)]
pub struct BrowserStorage {
    inner: Storage,
}

impl BrowserStorage {
    pub fn new() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .map(|inner| Self { inner })
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        // set_item fails when storage is full or blocked; surface it.
        self.inner
            .set_item(key, value)
            .map_err(|e: JsValue| CatalogError::Storage(format!("{e:?}")))
    }
}

/// Opens localStorage, falling back to a session-only in-memory slot when
/// the browser blocks storage access (bookmarks then do not survive the
/// tab).
pub fn open() -> Rc<dyn StoragePort> {
    match BrowserStorage::new() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("localStorage unavailable, bookmarks will not persist");
            Rc::new(MemoryStorage::default())
        }
    }
}

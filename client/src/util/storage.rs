//! `localStorage` backend for the diagram store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store itself (`diagram::store`) is browser-agnostic. This module
//! supplies the Web Storage implementation and the concrete store type
//! provided through Leptos context. On the server every call reports
//! [`StoreError::Unavailable`]; pages only touch the store from effects and
//! event handlers, which never run during server rendering.

use diagram::store::{DiagramStore, StorageBackend, StoreError};

use crate::util::clock::BrowserClock;

/// The store type shared through context.
pub type AppStore = DiagramStore<LocalStorageBackend, BrowserClock>;

/// Store over `window.localStorage` under the standard key.
pub fn browser_store() -> AppStore {
    DiagramStore::new(LocalStorageBackend, BrowserClock)
}

/// Web Storage backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(err) => Err(StoreError::Read(crate::util::js::error_message(&err))),
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|err| StoreError::Read(crate::util::js::error_message(&err)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|err| {
                let message = crate::util::js::error_message(&err);
                log::warn!("localStorage write rejected: {message}");
                StoreError::Write(message)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

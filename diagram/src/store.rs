//! Saved-diagram collection over a key/value backend.
//!
//! DESIGN
//! ======
//! The whole collection lives under a single key as one JSON array, read and
//! rewritten on every operation. The backend is a trait so the browser can
//! plug in `localStorage` while tests use [`MemoryBackend`]. Timestamps come from an injected [`Clock`].
//!
//! ERROR HANDLING
//! ==============
//! Backend failures and undecodable blobs surface as [`StoreError`]; nothing
//! is swallowed. A failed write leaves the previously stored blob in place,
//! so callers can keep their in-memory state and retry. There is no
//! cross-tab locking: two tabs saving at once can overwrite each other.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use time::OffsetDateTime;

use crate::config::STORAGE_KEY;
use crate::model::Diagram;
use crate::validate::{ValidationError, validate_name};

/// Error returned by [`DiagramStore`] operations and storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (e.g. server rendering, privacy mode).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend refused a read.
    #[error("failed to read saved diagrams: {0}")]
    Read(String),
    /// The backend refused a write (quota exceeded, etc.).
    #[error("failed to save diagrams: {0}")]
    Write(String),
    /// The stored blob is not a valid diagram array.
    #[error("saved diagrams are corrupt: {0}")]
    Decode(#[source] serde_json::Error),
    /// The collection could not be serialized.
    #[error("failed to encode diagrams: {0}")]
    Encode(#[source] serde_json::Error),
    /// The diagram name failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Minimal string key/value storage, shaped after the Web Storage API.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Read`] when the
    /// backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Write`] when the
    /// value was not stored.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process backend for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Source of "now" for save timestamps.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock backed by the operating system.
///
/// Not usable on `wasm32-unknown-unknown`; the browser client supplies its
/// own clock built on `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// The saved-diagram collection.
#[derive(Debug, Clone)]
pub struct DiagramStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    key: String,
}

impl<B: StorageBackend, C: Clock> DiagramStore<B, C> {
    /// Create a store over `backend` using the standard storage key.
    pub fn new(backend: B, clock: C) -> Self {
        Self::with_key(backend, clock, STORAGE_KEY)
    }

    /// Create a store that keeps its collection under `key`.
    pub fn with_key(backend: B, clock: C, key: impl Into<String>) -> Self {
        Self { backend, clock, key: key.into() }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// All saved diagrams, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the blob is corrupt.
    pub fn list(&self) -> Result<Vec<Diagram>, StoreError> {
        let mut diagrams = self.read_all()?;
        sort_newest_first(&mut diagrams);
        Ok(diagrams)
    }

    /// Insert or overwrite the diagram called `name`, stamping the current time.
    ///
    /// An existing record keeps its name and position in the stored array;
    /// only its content and timestamp change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a bad name, or a backend/codec
    /// error. Nothing is written on error.
    pub fn save(&self, name: &str, content: &str) -> Result<Diagram, StoreError> {
        validate_name(name)?;
        let mut diagrams = self.read_all()?;
        let now = self.clock.now();

        let saved = if let Some(existing) = diagrams.iter_mut().find(|d| d.name == name) {
            existing.content = content.to_owned();
            existing.last_updated = now;
            existing.clone()
        } else {
            let diagram = Diagram { name: name.to_owned(), content: content.to_owned(), last_updated: now };
            diagrams.push(diagram.clone());
            diagram
        };

        self.write_all(&diagrams)?;
        log::debug!("saved diagram {name:?} ({} total)", diagrams.len());
        Ok(saved)
    }

    /// Look up a diagram by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the blob is corrupt.
    pub fn load_by_name(&self, name: &str) -> Result<Option<Diagram>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|d| d.name == name))
    }

    /// Remove the diagram called `name` and return what remains, newest first.
    ///
    /// Deleting a name that is not stored changes nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns a backend/codec error; the stored collection is unchanged.
    pub fn delete(&self, name: &str) -> Result<Vec<Diagram>, StoreError> {
        let mut diagrams = self.read_all()?;
        let before = diagrams.len();
        diagrams.retain(|d| d.name != name);
        if diagrams.len() != before {
            self.write_all(&diagrams)?;
            log::debug!("deleted diagram {name:?}");
        }
        sort_newest_first(&mut diagrams);
        Ok(diagrams)
    }

    fn read_all(&self) -> Result<Vec<Diagram>, StoreError> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Decode),
        }
    }

    fn write_all(&self, diagrams: &[Diagram]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(diagrams).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &raw)
    }
}

fn sort_newest_first(diagrams: &mut [Diagram]) {
    diagrams.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
}

// src-tauri/src/persistence.rs
// Reads and writes the two top-level collections as JSON blobs.

use crate::error::{RecipeBoxError, StorageError};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub const RECIPES_KEY: &str = "recipes";
pub const SHOPPING_LIST_KEY: &str = "shoppingList";

/// Result of an operation whose in-memory effect always succeeds but whose
/// write-through may not have. A warning means the change lives only for
/// the rest of this session.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<StorageError>,
}

impl<T> Persisted<T> {
    pub fn durable(value: T) -> Self {
        Persisted {
            value,
            warning: None,
        }
    }

    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Treats a lost write as an error, for callers that need durability.
    pub fn into_result(self) -> Result<T, RecipeBoxError> {
        match self.warning {
            None => Ok(self.value),
            Some(e) => Err(RecipeBoxError::StorageUnavailable(e)),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Persisted<U> {
        Persisted {
            value: f(self.value),
            warning: self.warning,
        }
    }

    /// Carries `other`'s warning along if this one has none.
    pub(crate) fn absorb<U>(mut self, other: Persisted<U>) -> (Self, U) {
        if self.warning.is_none() {
            self.warning = other.warning;
        } else if let Some(extra) = other.warning {
            warn!(error = %extra, "additional storage failure");
        }
        (self, other.value)
    }
}

/// Wire form of `Persisted` for the frontend: the warning is rendered so the
/// view can show it as a non-fatal notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> From<Persisted<T>> for MutationResponse<T> {
    fn from(persisted: Persisted<T>) -> Self {
        MutationResponse {
            value: persisted.value,
            warning: persisted
                .warning
                .map(|e| RecipeBoxError::StorageUnavailable(e).to_string()),
        }
    }
}

/// Whether mutations of a collection reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    WriteThrough,
    /// The stored blob could not be read. Writing would replace data this
    /// session never saw, so changes stay in memory.
    SessionOnly,
}

/// A collection as read from the store, plus how later changes to it may
/// be written.
#[derive(Debug)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub mode: WriteMode,
}

impl<T> Loaded<T> {
    fn writable(items: Vec<T>) -> Self {
        Loaded {
            items,
            mode: WriteMode::WriteThrough,
        }
    }
}

#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Persistence { store }
    }

    /// Loads the collection stored under `key`. A missing key is an empty
    /// collection; a blob that fails to parse is replaced by an empty one
    /// on the spot. A failed read yields an empty, session-only collection
    /// and leaves the stored blob untouched.
    pub fn load<T: DeserializeOwned + Serialize>(&self, key: &str) -> Persisted<Loaded<T>> {
        let blob = match self.store.get(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Persisted::durable(Loaded::writable(Vec::new())),
            Err(e) => {
                error!(key, error = %e, "failed to read stored collection, not writing it this session");
                return Persisted {
                    value: Loaded {
                        items: Vec::new(),
                        mode: WriteMode::SessionOnly,
                    },
                    warning: Some(e),
                };
            }
        };

        match decode(key, &blob) {
            Ok(items) => {
                debug!(key, count = items.len(), "loaded collection");
                Persisted::durable(Loaded::writable(items))
            }
            Err(e) => {
                warn!(key, error = %e, "resetting malformed stored collection");
                let empty: Vec<T> = Vec::new();
                let warning = self.save(key, &empty).err();
                Persisted {
                    value: Loaded::writable(empty),
                    warning,
                }
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(items).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &blob).map_err(|e| {
            error!(key, error = %e, "failed to write collection");
            e
        })
    }

    /// Writes the collection and reports a failure as a warning. A
    /// session-only collection is never written.
    pub(crate) fn write_through<T: Serialize, V>(
        &self,
        key: &str,
        mode: WriteMode,
        items: &[T],
        value: V,
    ) -> Persisted<V> {
        let warning = match mode {
            WriteMode::WriteThrough => self.save(key, items).err(),
            WriteMode::SessionOnly => Some(StorageError::SessionOnly {
                key: key.to_string(),
            }),
        };
        Persisted { value, warning }
    }
}

pub fn decode<T: DeserializeOwned>(key: &str, blob: &str) -> Result<Vec<T>, RecipeBoxError> {
    serde_json::from_str(blob).map_err(|source| RecipeBoxError::MalformedStoredData {
        key: key.to_string(),
        source,
    })
}

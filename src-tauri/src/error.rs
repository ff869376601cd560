// src-tauri/src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which collection an id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Recipe,
    ShoppingItem,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Recipe => write!(f, "recipe"),
            EntityKind::ShoppingItem => write!(f, "shopping item"),
        }
    }
}

/// Failures of the durable key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Store lock poisoned: {0}")]
    Poisoned(String),

    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("'{key}' could not be read at startup, changes are kept for this session only")]
    SessionOnly { key: String },
}

/// Failures resolving startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to get current executable path: {0}")]
    ExecutablePath(#[from] std::io::Error),

    #[error("Executable path has no parent directory: {}", .0.display())]
    NoParentDirectory(PathBuf),
}

#[derive(Error, Debug)]
pub enum RecipeBoxError {
    #[error("{kind} with ID '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A change that was applied in memory but not saved.
    #[error("Changes could not be saved: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("Stored data under '{key}' is malformed: {source}")]
    MalformedStoredData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

impl RecipeBoxError {
    pub(crate) fn recipe_not_found(id: &str) -> Self {
        RecipeBoxError::NotFound {
            kind: EntityKind::Recipe,
            id: id.to_string(),
        }
    }

    pub(crate) fn item_not_found(id: &str) -> Self {
        RecipeBoxError::NotFound {
            kind: EntityKind::ShoppingItem,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecipeBoxError::NotFound { .. })
    }
}

pub type Result<T, E = RecipeBoxError> = std::result::Result<T, E>;

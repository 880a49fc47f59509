//! Local key-value persistence.
//!
//! Mirrors the browser's local storage: string values under string keys,
//! each value a JSON document rewritten in full on every mutation.

mod file;
mod memory;
mod persisted;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::{load_favorites, load_ratings, save_favorites, save_ratings};

use std::path::PathBuf;
use thiserror::Error;

/// Key holding the JSON array of favorite jokes.
pub const FAVORITES_KEY: &str = "favoriteJokes";
/// Key holding the JSON object of joke id -> score.
pub const RATINGS_KEY: &str = "jokeRatings";

/// Errors that can occur when reading or writing persisted values.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for '{key}' is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the whole value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

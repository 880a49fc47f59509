use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StorageError, FAVORITES_KEY, RATINGS_KEY};
use crate::joke::{Joke, Ratings};

/// Load the favorites list. Absent or empty values give an empty list.
pub fn load_favorites(store: &dyn KeyValueStore) -> Result<Vec<Joke>, StorageError> {
    Ok(load_json(store, FAVORITES_KEY)?.unwrap_or_default())
}

pub fn save_favorites(store: &dyn KeyValueStore, favorites: &[Joke]) -> Result<(), StorageError> {
    save_json(store, FAVORITES_KEY, &favorites)
}

/// Load the ratings map. Absent or empty values give an empty map.
pub fn load_ratings(store: &dyn KeyValueStore) -> Result<Ratings, StorageError> {
    Ok(load_json(store, RATINGS_KEY)?.unwrap_or_default())
}

pub fn save_ratings(store: &dyn KeyValueStore, ratings: &Ratings) -> Result<(), StorageError> {
    save_json(store, RATINGS_KEY, ratings)
}

fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Parse {
            key: key.to_string(),
            source,
        })
}

fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &encoded)
}

//! Joke records and the fetch unit that retrieves them.

mod client;
mod error;
mod worker;

pub use client::JokeClient;
pub use error::{FetchError, FETCH_ERROR_MESSAGE};
pub use worker::{spawn_fetch_worker, FetchCommand, FetchCommandSender};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier assigned to a joke by the remote API.
pub type JokeId = u64;

/// Per-joke score adjusted by thumbs-up/down. Entries are never pruned.
pub type Ratings = BTreeMap<JokeId, i64>;

/// A single joke as returned by the API.
///
/// Extra fields in the API payload (such as `type`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: JokeId,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(id: JokeId, setup: impl Into<String>, punchline: impl Into<String>) -> Self {
        Self {
            id,
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }
}

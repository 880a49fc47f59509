//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use jokebox::joke::{FetchError, Joke};
use jokebox::storage::{FileStore, MemoryStore};
use jokebox::ui::app::App;
use std::sync::Arc;
use tempfile::TempDir;

pub fn joke(id: u64) -> Joke {
    Joke::new(id, format!("Setup {id}"), format!("Punchline {id}"))
}

pub fn fetch_failure() -> FetchError {
    FetchError::Status {
        url: "http://127.0.0.1/random_joke".to_string(),
        status: 500,
    }
}

// -- App helpers --------------------------------------------------------------

/// App over an in-memory store. The store is returned for inspection.
pub fn make_app() -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = App::new(store.clone());
    (app, store)
}

/// App with `joke` already fetched and displayed.
pub fn make_app_showing(joke: Joke) -> (App, Arc<MemoryStore>) {
    let (mut app, store) = make_app();
    app.on_fetch_result(Ok(joke));
    (app, store)
}

/// App over a file store in a fresh temp dir, with persisted state loaded.
pub fn make_file_app(dir: &TempDir) -> App {
    let mut app = App::new(Arc::new(FileStore::new(dir.path())));
    app.load_persisted().expect("persisted state should load");
    app
}

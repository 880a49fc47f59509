//! Terminal joke widget.
//!
//! Fetches a random joke over HTTP, shows it in a ratatui screen and keeps
//! a rated, persisted list of favorites.

pub mod config;
pub mod joke;
pub mod logging;
pub mod storage;
pub mod ui;

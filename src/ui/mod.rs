pub mod app;
pub mod events;
pub mod favorites;
pub mod header;
pub mod input;
pub mod joke;
pub mod layout;
pub mod mvi;
pub mod ratings;
pub mod render;
pub mod runtime;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;

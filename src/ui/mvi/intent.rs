//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (thumbs-up, add to favorites) or
/// system events (a fetch finished).
pub trait Intent: Send + 'static {}

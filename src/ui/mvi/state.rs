//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the state before anything was loaded or fetched.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

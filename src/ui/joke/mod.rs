//! Fetch state of the displayed joke.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - current joke, loading flag, error message, refresh flag
//! - `intent.rs` - fetch lifecycle events and the refresh action
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::JokeIntent;
pub use reducer::JokeReducer;
pub use state::JokeState;

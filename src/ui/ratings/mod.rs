mod intent;
mod reducer;
mod state;

pub use intent::RatingsIntent;
pub use reducer::RatingsReducer;
pub use state::RatingsState;

//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen. Must stay free of side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

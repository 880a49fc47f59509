use crate::ui::joke::intent::JokeIntent;
use crate::ui::joke::state::JokeState;
use crate::ui::mvi::Reducer;

pub struct JokeReducer;

impl Reducer for JokeReducer {
    type State = JokeState;
    type Intent = JokeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            JokeIntent::FetchStarted => JokeState {
                loading: true,
                ..state
            },
            JokeIntent::Refresh => JokeState {
                refresh: !state.refresh,
                ..state
            },
            JokeIntent::FetchSucceeded { joke } => JokeState {
                joke: Some(joke),
                loading: false,
                error: None,
                ..state
            },
            // Previous joke is kept; the error panel hides it.
            JokeIntent::FetchFailed { message } => JokeState {
                loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}

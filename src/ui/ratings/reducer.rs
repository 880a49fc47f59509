use crate::ui::mvi::Reducer;
use crate::ui::ratings::intent::RatingsIntent;
use crate::ui::ratings::state::RatingsState;

pub struct RatingsReducer;

impl Reducer for RatingsReducer {
    type State = RatingsState;
    type Intent = RatingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RatingsIntent::Load { ratings } => RatingsState { scores: ratings },
            RatingsIntent::ThumbsUp { id } => {
                let mut scores = state.scores;
                let score = scores.entry(id).or_insert(0);
                *score = score.saturating_add(1);
                RatingsState { scores }
            }
            // No floor: scores may go arbitrarily negative.
            RatingsIntent::ThumbsDown { id } => {
                let mut scores = state.scores;
                let score = scores.entry(id).or_insert(0);
                *score = score.saturating_sub(1);
                RatingsState { scores }
            }
        }
    }
}

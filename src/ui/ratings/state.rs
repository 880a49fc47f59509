use crate::joke::{JokeId, Ratings};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingsState {
    pub scores: Ratings,
}

impl UiState for RatingsState {}

impl RatingsState {
    /// Score for `id`; unrated jokes score 0.
    pub fn score(&self, id: JokeId) -> i64 {
        self.scores.get(&id).copied().unwrap_or(0)
    }
}

use crate::joke::{Joke, JokeId};
use crate::ui::mvi::UiState;

/// Saved jokes in insertion order, unique by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub jokes: Vec<Joke>,
    /// Highlighted row, target of delete. Always `< jokes.len()` unless empty.
    pub selected: usize,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn contains(&self, id: JokeId) -> bool {
        self.jokes.iter().any(|joke| joke.id == id)
    }

    pub fn selected_joke(&self) -> Option<&Joke> {
        self.jokes.get(self.selected)
    }
}

use crate::joke::{Joke, JokeId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Hydrate from storage at startup.
    Load { jokes: Vec<Joke> },
    /// Append unless a joke with the same id is already saved.
    Add { joke: Joke },
    Delete { id: JokeId },
    MoveUp,
    MoveDown,
}

impl Intent for FavoritesIntent {}

use crate::joke::Joke;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum JokeIntent {
    /// A request has been handed to the fetch worker.
    FetchStarted,
    /// User asked for another joke. Flips the refresh flag; the caller
    /// starts a fetch when it observes the flip.
    Refresh,
    FetchSucceeded { joke: Joke },
    FetchFailed { message: String },
}

impl Intent for JokeIntent {}

use crate::joke::Joke;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct JokeState {
    /// Last successfully fetched joke. `None` until the first fetch lands.
    pub joke: Option<Joke>,
    /// True while a request is in flight.
    pub loading: bool,
    /// Set on failure, cleared by the next success.
    pub error: Option<String>,
    /// Toggled by every refresh; its value carries no meaning, only changes do.
    pub refresh: bool,
}

impl UiState for JokeState {}

impl JokeState {
    /// Joke shown to the user, hidden while the error panel is up.
    pub fn displayed(&self) -> Option<&Joke> {
        if self.error.is_some() {
            return None;
        }
        self.joke.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

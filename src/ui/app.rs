use crate::joke::{FetchCommand, FetchCommandSender, FetchError, Joke, JokeId, FETCH_ERROR_MESSAGE};
use crate::storage::{self, KeyValueStore, StorageError};
use crate::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesState};
use crate::ui::joke::{JokeIntent, JokeReducer, JokeState};
use crate::ui::mvi::Reducer;
use crate::ui::ratings::{RatingsIntent, RatingsReducer, RatingsState};
use std::sync::Arc;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Which panels the body shows. Derived, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelVisibility {
    pub joke: bool,
    pub error: bool,
    pub favorites: bool,
}

pub struct App {
    should_quit: bool,
    /// Fetch unit state (MVI pattern).
    joke: JokeState,
    /// Saved jokes (MVI pattern).
    favorites: FavoritesState,
    /// Per-joke scores (MVI pattern).
    ratings: RatingsState,
    store: Arc<dyn KeyValueStore>,
    fetch_sender: Option<FetchCommandSender>,
    ticks: usize,
}

impl App {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            should_quit: false,
            joke: JokeState::default(),
            favorites: FavoritesState::default(),
            ratings: RatingsState::default(),
            store,
            fetch_sender: None,
            ticks: 0,
        }
    }

    pub fn set_fetch_sender(&mut self, sender: FetchCommandSender) {
        self.fetch_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn joke_state(&self) -> &JokeState {
        &self.joke
    }

    pub fn favorites(&self) -> &FavoritesState {
        &self.favorites
    }

    pub fn ratings(&self) -> &RatingsState {
        &self.ratings
    }

    /// Tick counter driving the loading spinner.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility {
            joke: !self.joke.has_error(),
            error: self.joke.has_error(),
            favorites: !self.favorites.is_empty(),
        }
    }

    // ========================================================================
    // Startup
    // ========================================================================

    /// Read favorites and ratings once. Malformed stored JSON is an error;
    /// absent keys leave the empty defaults in place.
    pub fn load_persisted(&mut self) -> Result<(), StorageError> {
        let jokes = storage::load_favorites(self.store.as_ref())?;
        let ratings = storage::load_ratings(self.store.as_ref())?;
        tracing::info!(
            favorites = jokes.len(),
            ratings = ratings.len(),
            "loaded persisted state"
        );
        self.dispatch_favorites(FavoritesIntent::Load { jokes });
        self.dispatch_ratings(RatingsIntent::Load { ratings });
        Ok(())
    }

    /// Fetch the first joke.
    pub fn mount(&mut self) {
        self.start_fetch();
    }

    // ========================================================================
    // Fetch unit
    // ========================================================================

    pub fn refresh_joke(&mut self) {
        let before = self.joke.refresh;
        self.dispatch_joke(JokeIntent::Refresh);
        if self.joke.refresh != before {
            self.start_fetch();
        }
    }

    pub fn on_fetch_result(&mut self, result: Result<Joke, FetchError>) {
        match result {
            Ok(joke) => self.dispatch_joke(JokeIntent::FetchSucceeded { joke }),
            Err(err) => self.dispatch_joke(JokeIntent::FetchFailed {
                message: err.user_message().to_string(),
            }),
        }
    }

    fn start_fetch(&mut self) {
        self.dispatch_joke(JokeIntent::FetchStarted);
        if !self.send_command(FetchCommand::FetchRandom) {
            self.dispatch_joke(JokeIntent::FetchFailed {
                message: FETCH_ERROR_MESSAGE.to_string(),
            });
        }
    }

    fn send_command(&mut self, command: FetchCommand) -> bool {
        let Some(sender) = &self.fetch_sender else {
            tracing::warn!(?command, "no fetch worker attached");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "fetch command send failed");
                false
            }
        }
    }

    // ========================================================================
    // Ratings
    // ========================================================================

    pub fn thumbs_up(&mut self) {
        let Some(id) = self.displayed_id() else {
            return;
        };
        self.dispatch_ratings(RatingsIntent::ThumbsUp { id });
        self.persist_ratings();
    }

    pub fn thumbs_down(&mut self) {
        let Some(id) = self.displayed_id() else {
            return;
        };
        self.dispatch_ratings(RatingsIntent::ThumbsDown { id });
        self.persist_ratings();
    }

    // ========================================================================
    // Favorites
    // ========================================================================

    pub fn add_to_favorites(&mut self) {
        let Some(joke) = self.joke.displayed().cloned() else {
            return;
        };
        let before = self.favorites.jokes.len();
        self.dispatch_favorites(FavoritesIntent::Add { joke });
        if self.favorites.jokes.len() != before {
            self.persist_favorites();
        }
    }

    pub fn delete_favorite(&mut self, id: JokeId) {
        self.dispatch_favorites(FavoritesIntent::Delete { id });
        self.persist_favorites();
    }

    pub fn delete_selected_favorite(&mut self) {
        if let Some(id) = self.favorites.selected_joke().map(|joke| joke.id) {
            self.delete_favorite(id);
        }
    }

    pub fn select_previous_favorite(&mut self) {
        self.dispatch_favorites(FavoritesIntent::MoveUp);
    }

    pub fn select_next_favorite(&mut self) {
        self.dispatch_favorites(FavoritesIntent::MoveDown);
    }

    // ========================================================================
    // Dispatch + persistence
    // ========================================================================

    fn dispatch_joke(&mut self, intent: JokeIntent) {
        dispatch_mvi!(self, joke, JokeReducer, intent);
    }

    fn dispatch_favorites(&mut self, intent: FavoritesIntent) {
        dispatch_mvi!(self, favorites, FavoritesReducer, intent);
    }

    fn dispatch_ratings(&mut self, intent: RatingsIntent) {
        dispatch_mvi!(self, ratings, RatingsReducer, intent);
    }

    fn displayed_id(&self) -> Option<JokeId> {
        self.joke.displayed().map(|joke| joke.id)
    }

    // Write failures keep the in-memory state and are only logged.
    fn persist_favorites(&self) {
        if let Err(err) = storage::save_favorites(self.store.as_ref(), &self.favorites.jokes) {
            tracing::warn!(error = %err, "failed to persist favorites");
        }
    }

    fn persist_ratings(&self) {
        if let Err(err) = storage::save_ratings(self.store.as_ref(), &self.ratings.scores) {
            tracing::warn!(error = %err, "failed to persist ratings");
        }
    }
}

use crate::joke::Joke;
use crate::ui::favorites::intent::FavoritesIntent;
use crate::ui::favorites::state::FavoritesState;
use crate::ui::mvi::Reducer;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Load { jokes } => FavoritesState {
                jokes: dedup_by_id(jokes),
                selected: 0,
            },
            FavoritesIntent::Add { joke } => {
                if state.contains(joke.id) {
                    return state;
                }
                let mut jokes = state.jokes;
                jokes.push(joke);
                FavoritesState {
                    jokes,
                    selected: state.selected,
                }
            }
            FavoritesIntent::Delete { id } => {
                let mut jokes = state.jokes;
                jokes.retain(|joke| joke.id != id);
                let selected = state.selected.min(jokes.len().saturating_sub(1));
                FavoritesState { jokes, selected }
            }
            FavoritesIntent::MoveUp => {
                if state.jokes.is_empty() {
                    return state;
                }
                let selected = if state.selected == 0 {
                    state.jokes.len() - 1
                } else {
                    state.selected - 1
                };
                FavoritesState { selected, ..state }
            }
            FavoritesIntent::MoveDown => {
                if state.jokes.is_empty() {
                    return state;
                }
                let selected = if state.selected + 1 >= state.jokes.len() {
                    0
                } else {
                    state.selected + 1
                };
                FavoritesState { selected, ..state }
            }
        }
    }
}

/// Keeps the first occurrence of each id.
fn dedup_by_id(jokes: Vec<Joke>) -> Vec<Joke> {
    let mut unique: Vec<Joke> = Vec::with_capacity(jokes.len());
    for joke in jokes {
        if !unique.iter().any(|kept| kept.id == joke.id) {
            unique.push(joke);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(id: u64) -> Joke {
        Joke::new(id, format!("setup {id}"), format!("punchline {id}"))
    }

    fn with(ids: &[u64]) -> FavoritesState {
        FavoritesReducer::reduce(
            FavoritesState::default(),
            FavoritesIntent::Load {
                jokes: ids.iter().copied().map(joke).collect(),
            },
        )
    }

    #[test]
    fn add_appends_new_joke() {
        let state = FavoritesReducer::reduce(with(&[1]), FavoritesIntent::Add { joke: joke(2) });
        let ids: Vec<u64> = state.jokes.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn add_existing_id_is_noop() {
        let before = with(&[1]);
        let mut duplicate = joke(1);
        duplicate.setup = "different text, same id".to_string();
        let after = FavoritesReducer::reduce(before.clone(), FavoritesIntent::Add { joke: duplicate });
        assert_eq!(after, before);
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let state = FavoritesReducer::reduce(with(&[1, 2, 3]), FavoritesIntent::Delete { id: 2 });
        let ids: Vec<u64> = state.jokes.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_unknown_id_keeps_list() {
        let state = FavoritesReducer::reduce(with(&[1]), FavoritesIntent::Delete { id: 9 });
        assert_eq!(state.jokes.len(), 1);
    }

    #[test]
    fn delete_last_row_clamps_selection() {
        let state = FavoritesReducer::reduce(with(&[1, 2]), FavoritesIntent::MoveDown);
        assert_eq!(state.selected, 1);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::Delete { id: 2 });
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_joke().map(|j| j.id), Some(1));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let state = FavoritesReducer::reduce(with(&[1, 2, 3]), FavoritesIntent::MoveUp);
        assert_eq!(state.selected, 2);
        let state = FavoritesReducer::reduce(state, FavoritesIntent::MoveDown);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn movement_on_empty_list_is_noop() {
        let state = FavoritesReducer::reduce(FavoritesState::default(), FavoritesIntent::MoveDown);
        assert_eq!(state, FavoritesState::default());
    }

    #[test]
    fn load_drops_duplicate_ids() {
        let state = with(&[4, 4, 5]);
        assert_eq!(state.jokes.len(), 2);
    }
}

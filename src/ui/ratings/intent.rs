use crate::joke::{JokeId, Ratings};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RatingsIntent {
    Load { ratings: Ratings },
    ThumbsUp { id: JokeId },
    ThumbsDown { id: JokeId },
}

impl Intent for RatingsIntent {}

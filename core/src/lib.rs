pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Board, Difficulty, GameController, GameError, GameOutcome, GameState, Mark, Turn,
};

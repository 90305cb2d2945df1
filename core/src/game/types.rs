use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    PlayerWon,
    BotWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Player,
    Bot,
}

/// A completed line, reported so the presentation layer can highlight it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The target cell is out of bounds or already marked.
    IllegalMove { index: usize },
    /// A move was attempted after the game reached a terminal outcome.
    GameAlreadyEnded,
    /// A strategy was invoked on a board with no playable cell. Not
    /// reachable through the public API.
    NoLegalMove,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { index } => {
                write!(f, "Illegal move: cell {} is out of bounds or already marked", index)
            }
            GameError::GameAlreadyEnded => write!(f, "Game is already over"),
            GameError::NoLegalMove => write!(f, "No legal move available"),
        }
    }
}

impl Error for GameError {}

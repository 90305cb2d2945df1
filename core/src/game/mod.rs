mod board;
mod bot;
mod controller;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{
    HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, minimax_move, strategy_for,
};
pub use controller::{BOT_MARK, GameController, GameState, PLAYER_MARK};
pub use session_rng::SessionRng;
pub use types::{Difficulty, GameError, GameOutcome, Mark, Turn, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, has_win, is_draw};

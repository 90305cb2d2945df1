use crate::log;

use super::board::Board;
use super::bot::{RandomStrategy, Strategy, strategy_for};
use super::session_rng::SessionRng;
use super::types::{Difficulty, GameError, GameOutcome, Mark, Turn, WinningLine};
use super::win_detector::{check_win_with_line, has_win};

pub const PLAYER_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

/// Read-only snapshot handed to the presentation layer after every move and
/// on demand for redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub outcome: GameOutcome,
    pub turn: Turn,
    pub winning_line: Option<WinningLine>,
}

/// Drives a single human-versus-bot game. The player is always X and moves
/// first; the bot replies within the same `player_move` call.
pub struct GameController {
    board: Board,
    turn: Turn,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl GameController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, SessionRng::from_random())
    }

    pub fn with_rng(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            difficulty,
            rng,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(difficulty: Difficulty, board: Board, rng: SessionRng) -> Self {
        Self {
            board,
            turn: Turn::Player,
            difficulty,
            rng,
        }
    }

    pub fn start_new_game(&mut self) {
        self.board.reset();
        self.turn = Turn::Player;
        log!("New game started (difficulty: {:?})", self.difficulty);
    }

    /// Rebinds the bot strategy. Does not reset the board or the turn.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log!("Difficulty changed: {:?} -> {:?}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_state(&self) -> GameState {
        GameState {
            board: self.board,
            outcome: self.outcome(),
            turn: self.turn,
            winning_line: check_win_with_line(&self.board),
        }
    }

    /// Applies the player's move and, if the game continues, the bot's
    /// automatic reply. On error the board and turn are unchanged.
    pub fn player_move(&mut self, index: usize) -> Result<GameState, GameError> {
        if self.outcome() != GameOutcome::InProgress {
            return Err(GameError::GameAlreadyEnded);
        }

        self.board.place(index, PLAYER_MARK)?;

        if self.outcome() == GameOutcome::InProgress {
            self.turn = Turn::Bot;
            self.play_bot_turn()?;
        }

        let state = self.current_state();
        if state.outcome != GameOutcome::InProgress {
            log!("Game over: {:?} (seed: {})", state.outcome, self.rng.seed());
        }
        Ok(state)
    }

    fn play_bot_turn(&mut self) -> Result<(), GameError> {
        let strategy = strategy_for(self.difficulty);
        let index = strategy
            .choose_move(&self.board, BOT_MARK, &mut self.rng)
            .or_else(|| RandomStrategy.choose_move(&self.board, BOT_MARK, &mut self.rng))
            .ok_or(GameError::NoLegalMove)?;

        self.board.place(index, BOT_MARK)?;

        if self.outcome() == GameOutcome::InProgress {
            self.turn = Turn::Player;
        }
        Ok(())
    }

    /// The outcome is derived from the board on every query, never stored.
    fn outcome(&self) -> GameOutcome {
        if has_win(&self.board, PLAYER_MARK) {
            return GameOutcome::PlayerWon;
        }
        if has_win(&self.board, BOT_MARK) {
            return GameOutcome::BotWon;
        }
        if self.board.is_full() {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::CELL_COUNT;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn mark_count(board: &Board) -> usize {
        board.cells().iter().filter(|&&cell| cell != E).count()
    }

    #[test]
    fn test_fresh_game_snapshot() {
        let controller = GameController::new(Difficulty::Easy);
        let state = controller.current_state();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(state.winning_line, None);
    }

    #[test]
    fn test_current_state_is_idempotent() {
        let mut controller = GameController::with_rng(Difficulty::Easy, SessionRng::new(5));
        controller.player_move(4).unwrap();
        assert_eq!(controller.current_state(), controller.current_state());
    }

    #[test]
    fn test_first_exchange_leaves_two_marks_and_player_turn() {
        let mut controller = GameController::with_rng(Difficulty::Easy, SessionRng::new(17));
        let state = controller.player_move(0).unwrap();

        assert_eq!(state.board.get(0), Some(X));
        assert_eq!(mark_count(&state.board), 2);
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(
            state.board.cells().iter().filter(|&&cell| cell == O).count(),
            1
        );
    }

    #[test]
    fn test_move_on_occupied_cell_changes_nothing() {
        let mut controller = GameController::with_rng(Difficulty::Easy, SessionRng::new(17));
        controller.player_move(0).unwrap();
        let before = controller.current_state();

        let occupied = before
            .board
            .cells()
            .iter()
            .position(|&cell| cell != E)
            .unwrap();
        let result = controller.player_move(occupied);

        assert_eq!(result, Err(GameError::IllegalMove { index: occupied }));
        assert_eq!(controller.current_state(), before);
    }

    #[test]
    fn test_move_out_of_bounds_changes_nothing() {
        let mut controller = GameController::new(Difficulty::Easy);
        let before = controller.current_state();
        let result = controller.player_move(CELL_COUNT);
        assert_eq!(result, Err(GameError::IllegalMove { index: CELL_COUNT }));
        assert_eq!(controller.current_state(), before);
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let mut controller =
            GameController::with_board(Difficulty::Easy, board, SessionRng::new(1));

        let state = controller.current_state();
        assert_eq!(state.outcome, GameOutcome::PlayerWon);
        assert_eq!(state.winning_line.unwrap().cells, [0, 1, 2]);

        let result = controller.player_move(5);
        assert_eq!(result, Err(GameError::GameAlreadyEnded));
        assert_eq!(controller.current_state().board, board);
    }

    #[test]
    fn test_start_new_game_resets_a_finished_game() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let mut controller =
            GameController::with_board(Difficulty::Hard, board, SessionRng::new(1));

        controller.start_new_game();
        let state = controller.current_state();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.outcome, GameOutcome::InProgress);
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(controller.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_set_difficulty_mid_game_keeps_the_board() {
        let mut controller = GameController::with_rng(Difficulty::Easy, SessionRng::new(3));
        let state = controller.player_move(4).unwrap();

        controller.set_difficulty(Difficulty::Hard);
        assert_eq!(controller.difficulty(), Difficulty::Hard);
        assert_eq!(controller.current_state(), state);
    }

    #[test]
    fn test_medium_bot_blocks_through_the_controller() {
        // Player holds 0 and 4, bot holds 8. Playing 2 gives the player two
        // open threats ([0,1,2] and [2,4,6]); the bot must block the lowest.
        let board = Board::from_cells([X, E, E, E, X, E, E, E, O]);
        let mut controller =
            GameController::with_board(Difficulty::Medium, board, SessionRng::new(1));

        let state = controller.player_move(2).unwrap();
        assert_eq!(state.board.get(1), Some(O));
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_medium_bot_falls_back_to_random_without_a_decisive_move() {
        let mut controller = GameController::with_rng(Difficulty::Medium, SessionRng::new(11));
        let state = controller.player_move(0).unwrap();
        assert_eq!(mark_count(&state.board), 2);
        assert_eq!(state.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn test_hard_bot_never_loses_against_random_play() {
        for seed in 0..20 {
            let mut controller =
                GameController::with_rng(Difficulty::Hard, SessionRng::new(1000 + seed));
            let mut player_rng = SessionRng::new(seed);

            loop {
                let state = controller.current_state();
                if state.outcome != GameOutcome::InProgress {
                    assert_ne!(
                        state.outcome,
                        GameOutcome::PlayerWon,
                        "random player beat the hard bot with seed {}",
                        seed
                    );
                    break;
                }

                let index = RandomStrategy
                    .choose_move(&state.board, PLAYER_MARK, &mut player_rng)
                    .unwrap();
                controller.player_move(index).unwrap();
            }
        }
    }
}

use super::board::{Board, CELL_COUNT};
use super::session_rng::SessionRng;
use super::types::{Difficulty, Mark};
use super::win_detector::{check_win, has_win};

/// A bot move policy. `None` means the strategy produced no move: for
/// [`HeuristicStrategy`] that is "no decisive move on this turn", for the
/// others it only happens on a terminal board.
pub trait Strategy {
    fn choose_move(&self, board: &Board, bot_mark: Mark, rng: &mut SessionRng) -> Option<usize>;
}

pub fn strategy_for(difficulty: Difficulty) -> &'static dyn Strategy {
    match difficulty {
        Difficulty::Easy => &RandomStrategy,
        Difficulty::Medium => &HeuristicStrategy,
        Difficulty::Hard => &MinimaxStrategy,
    }
}

/// Easy: a uniformly random empty cell.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_move(&self, board: &Board, _bot_mark: Mark, rng: &mut SessionRng) -> Option<usize> {
        let available = board.empty_indices();
        if available.is_empty() {
            return None;
        }
        let choice = rng.random_range(0..available.len());
        Some(available[choice])
    }
}

/// Medium: one-ply lookahead. Take an immediate win, else block the
/// opponent's immediate win, else signal no decisive move.
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn choose_move(&self, board: &Board, bot_mark: Mark, _rng: &mut SessionRng) -> Option<usize> {
        let opponent_mark = bot_mark.opponent()?;
        let mut scratch = *board;

        if let Some(index) = find_winning_move(&mut scratch, bot_mark) {
            return Some(index);
        }
        find_winning_move(&mut scratch, opponent_mark)
    }
}

/// Lowest empty index whose placement completes a line for `mark`. Every
/// probe is undone before the next candidate.
fn find_winning_move(board: &mut Board, mark: Mark) -> Option<usize> {
    for index in 0..CELL_COUNT {
        if !board.is_empty_cell(index) {
            continue;
        }
        board.set(index, mark);
        let wins = has_win(board, mark);
        board.set(index, Mark::Empty);
        if wins {
            return Some(index);
        }
    }
    None
}

/// Hard: exhaustive game-tree search. Never loses.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn choose_move(&self, board: &Board, bot_mark: Mark, _rng: &mut SessionRng) -> Option<usize> {
        minimax_move(board, bot_mark)
    }
}

const WIN_SCORE: i32 = 10;

/// The game-theoretically optimal cell for `bot_mark`, or `None` on a full
/// or already decided board. Ties go to the lowest index.
pub fn minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    if check_win(board).is_some() {
        return None;
    }

    let mut scratch = *board;
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for index in 0..CELL_COUNT {
        if !scratch.is_empty_cell(index) {
            continue;
        }

        scratch.set(index, bot_mark);
        let score = minimax(&mut scratch, bot_mark, opponent_mark, false);
        scratch.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Full-depth search over the scratch board. The board is mutated in place
/// and every placement is undone right after its subtree is scored, so no
/// allocation happens per branch.
fn minimax(board: &mut Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    if has_win(board, bot_mark) {
        return WIN_SCORE;
    }
    if has_win(board, opponent_mark) {
        return -WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_empty_cell(index) {
                continue;
            }
            board.set(index, bot_mark);
            let score = minimax(board, bot_mark, opponent_mark, false);
            board.set(index, Mark::Empty);
            best_score = best_score.max(score);
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_empty_cell(index) {
                continue;
            }
            board.set(index, opponent_mark);
            let score = minimax(board, bot_mark, opponent_mark, true);
            board.set(index, Mark::Empty);
            best_score = best_score.min(score);
        }
        best_score
    }
}

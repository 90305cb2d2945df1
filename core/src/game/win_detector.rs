use super::board::Board;
use super::types::{Mark, WinningLine};

/// The 8 ways to win on a 3x3 board: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_win(board: &Board, mark: Mark) -> bool {
    debug_assert!(mark != Mark::Empty);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in WINNING_LINES {
        let mark = match board.get(cells[0]) {
            Some(mark) if mark != Mark::Empty => mark,
            _ => continue,
        };
        if cells.iter().all(|&index| board.get(index) == Some(mark)) {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

/// A full board with no completed line. A full board that does contain a
/// line is a win, never a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

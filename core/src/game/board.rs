use super::types::{GameError, Mark};

pub const CELL_COUNT: usize = 9;

/// The 3x3 playing field, row-major: index 0 is the top-left cell,
/// index 8 the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    #[cfg(test)]
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    /// Places `mark` on an empty cell. The board is left untouched on error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        debug_assert!(mark != Mark::Empty);

        if index >= CELL_COUNT {
            return Err(GameError::IllegalMove { index });
        }
        if self.cells[index] != Mark::Empty {
            return Err(GameError::IllegalMove { index });
        }

        self.cells[index] = mark;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    /// Unchecked write, used by the strategies for place/undo scans over
    /// cells they already know to be empty.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

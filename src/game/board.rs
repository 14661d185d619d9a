use crate::error::GameError;

/// Rows on a classic Connect Four board.
pub const DEFAULT_ROWS: usize = 6;
/// Columns on a classic Connect Four board.
pub const DEFAULT_COLS: usize = 7;

/// Smallest dimension able to host a four-in-a-row.
pub const MIN_DIM: usize = 4;

/// Length of a winning run. The engine is fixed at four-in-a-row.
const CONNECT: usize = 4;

/// Run directions checked from each anchor cell, as (row, col) steps:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A `height` x `width` grid of cells, row 0 at the top. Pieces settle toward
/// the highest-indexed (bottom) row of their column, and an occupied cell is
/// never cleared or overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must be at least 4.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < MIN_DIM || width < MIN_DIM {
            return Err(GameError::InvalidDimensions { height, width });
        }
        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.height || col >= self.width {
            return Err(GameError::OutOfBounds { row, column: col });
        }
        Ok(self.cells[row * self.width + col])
    }

    fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.at(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Scans the column from the bottom row upward; the first empty cell is
    /// the landing cell. Rejections leave the board untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= self.width {
            return Err(GameError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        if self.is_column_full(col) {
            return Err(GameError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            if self.at(row, col) == Cell::Empty {
                self.cells[row * self.width + col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check whether `cell` has four-in-a-row anywhere on the board.
    ///
    /// Every cell is treated as the anchor of four candidate runs (horizontal,
    /// vertical, diagonal down-right, diagonal down-left). A run wins if all
    /// four of its cells are in bounds and all belong to `cell`. Sweeping every
    /// anchor means any run through any position is found regardless of
    /// orientation; scan order is row-major and deterministic.
    pub fn check_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        for row in 0..self.height {
            for col in 0..self.width {
                for (row_step, col_step) in DIRECTIONS {
                    if self.run_matches(row, col, row_step, col_step, cell) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Check a single four-cell run anchored at (row, col) stepping by
    /// (row_step, col_step). Any cell out of bounds disqualifies the run.
    fn run_matches(
        &self,
        row: usize,
        col: usize,
        row_step: isize,
        col_step: isize,
        cell: Cell,
    ) -> bool {
        for step in 0..CONNECT as isize {
            let r = row as isize + row_step * step;
            let c = col as isize + col_step * step;
            if r < 0 || r >= self.height as isize || c < 0 || c >= self.width as isize {
                return false;
            }
            if self.at(r as usize, c as usize) != cell {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    /// The classic 6x7 board.
    fn default() -> Self {
        Board {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

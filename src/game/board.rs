use serde::Serialize;

use crate::error::{ConfigError, MoveError};

/// Number of pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// Direction pairs walked from a freshly placed piece, as (Δcol, Δrow).
/// Each axis is walked both ways: vertical, horizontal, rising, falling.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

/// Board size. Both dimensions are non-zero once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
}

impl Dimensions {
    /// The classic 7 x 6 board.
    pub const STANDARD: Dimensions = Dimensions {
        columns: 7,
        rows: 6,
    };

    /// Largest accepted side length.
    pub const MAX_SIDE: usize = 64;

    pub fn new(columns: usize, rows: usize) -> Result<Self, ConfigError> {
        if columns == 0 || columns > Self::MAX_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.columns must be in 1..={}",
                Self::MAX_SIDE
            )));
        }
        if rows == 0 || rows > Self::MAX_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in 1..={}",
                Self::MAX_SIDE
            )));
        }
        Ok(Dimensions { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Column-major grid. Row 0 is the bottom of each column, so pieces fill
/// upward and the filled cells of a column are always contiguous from row 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    dims: Dimensions,
    columns: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(dims: Dimensions) -> Self {
        Grid {
            dims,
            columns: vec![vec![Cell::Empty; dims.rows]; dims.columns],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Get the cell at a position, or `None` when it lies off the grid
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.columns.get(column)?.get(row).copied()
    }

    /// The cells of one column, bottom first
    pub fn column(&self, column: usize) -> Option<&[Cell]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Check if a column is full. Columns off the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.columns.get(column) {
            Some(cells) => cells[self.dims.rows - 1] != Cell::Empty,
            None => true,
        }
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        (0..self.dims.columns).all(|col| self.is_column_full(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Result<usize, MoveError> {
        let cells = self
            .columns
            .get_mut(column)
            .ok_or(MoveError::InvalidColumn)?;
        let row = cells
            .iter()
            .position(|&c| c == Cell::Empty)
            .ok_or(MoveError::ColumnFull)?;
        cells[row] = cell;
        Ok(row)
    }

    /// Count pieces matching the one at (column, row), walking away from it
    /// by (dc, dr) until the grid edge or a different cell. The starting
    /// piece itself is not counted.
    pub fn count_adjacent(&self, column: usize, row: usize, dc: isize, dr: isize) -> usize {
        let Some(target) = self.get(column, row) else {
            return 0;
        };

        let mut count = 0;
        let mut col = column as isize + dc;
        let mut r = row as isize + dr;
        while col >= 0 && r >= 0 {
            match self.get(col as usize, r as usize) {
                Some(cell) if cell == target => count += 1,
                _ => break,
            }
            col += dc;
            r += dr;
        }
        count
    }

    /// Check if the piece at (column, row) completes a line on any axis
    pub fn check_win(&self, column: usize, row: usize) -> bool {
        match self.get(column, row) {
            None | Some(Cell::Empty) => return false,
            Some(_) => {}
        }

        AXES.iter().any(|&(dc, dr)| {
            self.count_adjacent(column, row, dc, dr) + self.count_adjacent(column, row, -dc, -dr)
                >= CONNECT - 1
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Dimensions::STANDARD)
    }
}

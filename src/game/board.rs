use std::fmt;

use crate::error::BoardError;

use super::seat::Seat;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The seat occupying this cell, if any
    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Seat::Red),
            Cell::Yellow => Some(Seat::Yellow),
        }
    }

    /// Numeric encoding used in snapshots: 0 empty, 1 red, 2 yellow.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Yellow => 2,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

/// Gravity board. Row 0 is the top, row `rows - 1` is the bottom.
///
/// Pieces are only ever written to the lowest empty cell of a column, so a
/// cell above an empty cell is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![Cell::Empty; ROWS * COLS],
            heights: vec![0; COLS],
        }
    }

    /// Create an empty board with custom dimensions
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size > 0 && size <= isize::MAX as usize)
            .ok_or(BoardError::InvalidDimensions { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; size],
            heights: vec![0; cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                column: col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cell(row, col))
    }

    /// Unchecked access for coordinates the caller has already bounded.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.heights.get(col) {
            Some(&height) => height == self.rows,
            None => true,
        }
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> Result<usize, BoardError> {
        self.heights
            .get(col)
            .copied()
            .ok_or(BoardError::InvalidColumn {
                column: col,
                cols: self.cols,
            })
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<usize, BoardError> {
        if col >= self.cols {
            return Err(BoardError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull { column: col });
        }

        let row = self.rows - 1 - self.heights[col];
        self.cells[row * self.cols + col] = seat.to_cell();
        self.heights[col] += 1;
        Ok(row)
    }

    /// Remove the top piece of a column. Search uses this to undo a drop.
    pub(crate) fn lift_piece(&mut self, col: usize) {
        if let Some(height) = self.heights.get_mut(col) {
            if *height > 0 {
                let row = self.rows - *height;
                self.cells[row * self.cols + col] = Cell::Empty;
                *height -= 1;
            }
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Row-major matrix of cell codes (0 empty, 1 red, 2 yellow), top row first.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.cols).map(|c| (c % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

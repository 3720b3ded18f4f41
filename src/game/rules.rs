use serde::{Deserialize, Serialize};

use crate::error::{BoardError, RuleError};

use super::board::{Board, Cell};
use super::seat::Seat;

pub const WIN_LENGTH: usize = 4;

/// Line directions as (row step, col step): horizontal, vertical, ↗, ↘.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "winner", rename_all = "snake_case")]
pub enum GameResult {
    InProgress,
    Win(Seat),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Seat> {
        match self {
            GameResult::Win(seat) => Some(seat),
            _ => None,
        }
    }
}

/// Applies gravity drops and decides the result after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEngine {
    win_length: usize,
}

impl RuleEngine {
    pub fn new(win_length: usize) -> Result<Self, RuleError> {
        if win_length < 2 {
            return Err(RuleError::WinLengthTooShort(win_length));
        }
        Ok(RuleEngine { win_length })
    }

    /// A line must fit along at least one axis of the board to be winnable.
    pub fn check_fits(&self, board: &Board) -> Result<(), RuleError> {
        if self.win_length > board.rows().max(board.cols()) {
            return Err(RuleError::WinLengthTooLong {
                win_length: self.win_length,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        Ok(())
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Drop `seat`'s piece into `column` and classify the resulting position.
    pub fn apply_move(
        &self,
        board: &mut Board,
        seat: Seat,
        column: usize,
    ) -> Result<(usize, GameResult), BoardError> {
        let row = board.drop_piece(column, seat)?;
        Ok((row, self.classify(board, row, column)))
    }

    /// Result of the position given that the last piece landed at (row, col).
    pub fn classify(&self, board: &Board, row: usize, col: usize) -> GameResult {
        match board.cell(row, col).seat() {
            Some(seat) if self.is_win_at(board, row, col) => GameResult::Win(seat),
            _ if board.is_full() => GameResult::Draw,
            _ => GameResult::InProgress,
        }
    }

    /// Whether the piece at (row, col) completes a line on any axis.
    pub fn is_win_at(&self, board: &Board, row: usize, col: usize) -> bool {
        let cell = board.cell(row, col);
        if cell == Cell::Empty {
            return false;
        }
        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(board, row, col, dr, dc, cell)
                + self.run_length(board, row, col, -dr, -dc, cell);
            run >= self.win_length
        })
    }

    /// Cells of the first complete line through (row, col), ordered along its axis.
    pub fn winning_line(
        &self,
        board: &Board,
        row: usize,
        col: usize,
    ) -> Option<Vec<(usize, usize)>> {
        let cell = board.cell(row, col);
        if cell == Cell::Empty {
            return None;
        }
        AXES.iter().find_map(|&(dr, dc)| {
            let back = self.run_length(board, row, col, -dr, -dc, cell);
            let forward = self.run_length(board, row, col, dr, dc, cell);
            if 1 + back + forward < self.win_length {
                return None;
            }
            let start = (row as isize - dr * back as isize, col as isize - dc * back as isize);
            Some(
                (0..=back + forward)
                    .map(|i| {
                        let i = i as isize;
                        ((start.0 + dr * i) as usize, (start.1 + dc * i) as usize)
                    })
                    .collect(),
            )
        })
    }

    /// Count matching cells stepping away from (row, col), at most win_length - 1.
    fn run_length(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
    ) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while count < self.win_length - 1
            && r >= 0
            && c >= 0
            && (r as usize) < board.rows()
            && (c as usize) < board.cols()
            && board.cell(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        RuleEngine {
            win_length: WIN_LENGTH,
        }
    }
}

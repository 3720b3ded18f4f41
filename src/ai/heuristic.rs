use crate::game::{Board, Cell, Seat};

use super::selector::Difficulty;

/// Trait for evaluating a board position from a seat's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, seat: Seat) -> i32;
}

/// Scores positions by the winning windows (runs of `win_length` cells on any
/// axis) each side can still complete.
pub struct WindowHeuristic {
    difficulty: Difficulty,
    win_length: usize,
    windows: Vec<Vec<(usize, usize)>>,
}

impl WindowHeuristic {
    pub fn new(difficulty: Difficulty, rows: usize, cols: usize, win_length: usize) -> Self {
        WindowHeuristic {
            difficulty,
            win_length,
            windows: all_windows(rows, cols, win_length),
        }
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn count(&self, board: &Board, window: &[(usize, usize)], own: Cell) -> (usize, usize) {
        let mut mine = 0;
        let mut theirs = 0;
        for &(r, c) in window {
            match board.cell(r, c) {
                Cell::Empty => {}
                cell if cell == own => mine += 1,
                _ => theirs += 1,
            }
        }
        (mine, theirs)
    }

    fn threat_weight(&self, pieces: usize, near: i32, far: i32) -> i32 {
        if pieces + 1 == self.win_length {
            near
        } else if pieces + 2 == self.win_length {
            far
        } else {
            pieces as i32
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, seat: Seat) -> i32 {
        let own = seat.to_cell();
        let mut own_open = 0;
        let mut opp_open = 0;
        let mut weighted = 0;

        for window in &self.windows {
            let (mine, theirs) = self.count(board, window, own);
            if theirs == 0 {
                own_open += 1;
                weighted += self.threat_weight(mine, 50, 10);
            }
            if mine == 0 {
                opp_open += 1;
                weighted -= self.threat_weight(theirs, 80, 10);
            }
        }

        match self.difficulty {
            Difficulty::Easy => own_open,
            Difficulty::Medium => own_open - 2 * opp_open,
            Difficulty::Hard => weighted + center_bonus(board, own),
        }
    }
}

/// +3 per own piece in the center column, -3 per opponent piece.
fn center_bonus(board: &Board, own: Cell) -> i32 {
    let center = board.cols() / 2;
    (0..board.rows())
        .map(|row| match board.cell(row, center) {
            Cell::Empty => 0,
            cell if cell == own => 3,
            _ => -3,
        })
        .sum()
}

/// Every horizontal, vertical and diagonal run of `len` cells on the board.
/// Runs longer than the board yield no windows.
pub fn all_windows(rows: usize, cols: usize, len: usize) -> Vec<Vec<(usize, usize)>> {
    let mut windows = Vec::new();
    let Some(span) = len.checked_sub(1) else {
        return windows;
    };

    if span < cols {
        for row in 0..rows {
            for col in 0..cols - span {
                windows.push((0..len).map(|i| (row, col + i)).collect());
            }
        }
    }
    if span < rows {
        for row in 0..rows - span {
            for col in 0..cols {
                windows.push((0..len).map(|i| (row + i, col)).collect());
            }
        }
    }
    if span < rows && span < cols {
        for row in 0..rows - span {
            for col in 0..cols - span {
                windows.push((0..len).map(|i| (row + i, col + i)).collect());
            }
        }
        for row in span..rows {
            for col in 0..cols - span {
                windows.push((0..len).map(|i| (row - i, col + i)).collect());
            }
        }
    }

    windows
}

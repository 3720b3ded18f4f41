use std::path::PathBuf;

use crate::game::Seat;

/// Errors raised by the board itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({row}, {column}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board dimensions {rows}x{cols} must be non-empty and addressable")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors raised when the rules are configured for a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("win length must be at least 2 (got {0})")]
    WinLengthTooShort(usize),

    #[error("win length {win_length} does not fit on a {rows}x{cols} board")]
    WinLengthTooLong {
        win_length: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors raised when a move is submitted to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("it is {expected}'s turn, not {seat}'s")]
    NotYourTurn { seat: Seat, expected: Seat },

    #[error("game is already finished")]
    GameAlreadyFinished,
}

/// Errors raised by computer move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// Errors raised while building or driving a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("replayed move #{index} was rejected: {source}")]
    Replay { index: usize, source: MoveError },

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Rules(#[from] RuleError),

    #[error("{0} is controlled by a human, not a computer")]
    NotComputerSeat(Seat),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidColumn { column: 7, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 7 is out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_move_error_wraps_board_error() {
        let err: MoveError = BoardError::ColumnFull { column: 2 }.into();
        assert_eq!(err.to_string(), "column 2 is full");
        assert_eq!(err, MoveError::Board(BoardError::ColumnFull { column: 2 }));
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::WinLengthTooLong {
            win_length: 8,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "win length 8 does not fit on a 6x7 board");
        let err: SessionError = RuleError::WinLengthTooShort(1).into();
        assert_eq!(err.to_string(), "win length must be at least 2 (got 1)");
    }

    #[test]
    fn test_not_your_turn_display() {
        let err = MoveError::NotYourTurn {
            seat: Seat::Yellow,
            expected: Seat::Red,
        };
        assert_eq!(err.to_string(), "it is Red's turn, not Yellow's");
    }

    #[test]
    fn test_replay_error_display() {
        let err = SessionError::Replay {
            index: 3,
            source: MoveError::GameAlreadyFinished,
        };
        assert_eq!(
            err.to_string(),
            "replayed move #3 was rejected: game is already finished"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be >= 1"
        );
    }
}

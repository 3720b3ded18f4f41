//! Property tests for the board and turn invariants under arbitrary input.

use proptest::prelude::*;

use connect_four_engine::error::{BoardError, MoveError};
use connect_four_engine::game::{Board, Cell, GameResult, GameSession, Seat, COLS, ROWS};

fn assert_gravity_consistent(board: &Board) {
    for col in 0..board.cols() {
        for row in 1..board.rows() {
            let above = board.get(row - 1, col).unwrap();
            let below = board.get(row, col).unwrap();
            if below == Cell::Empty {
                assert_eq!(above, Cell::Empty, "floating piece at ({}, {col})", row - 1);
            }
        }
    }
}

proptest! {
    #[test]
    fn gravity_holds_for_any_column_sequence(columns in prop::collection::vec(0usize..9, 0..80)) {
        let mut session = GameSession::standard();
        for column in columns {
            let Some(seat) = session.active_seat() else { break };
            let _ = session.submit_move(seat, column);
            assert_gravity_consistent(session.board());
        }
        prop_assert_eq!(session.board().piece_count(), session.history().len());
    }

    #[test]
    fn turns_alternate_until_terminal(columns in prop::collection::vec(0usize..COLS, 0..60)) {
        let mut session = GameSession::standard();
        for column in columns {
            match session.active_seat() {
                Some(seat) => {
                    match session.submit_move(seat, column) {
                        Ok(report) => {
                            if report.result == GameResult::InProgress {
                                prop_assert_eq!(report.next, Some(seat.other()));
                            } else {
                                prop_assert_eq!(report.next, None);
                                prop_assert!(session.is_finished());
                            }
                        }
                        Err(err) => {
                            prop_assert_eq!(
                                err,
                                MoveError::Board(BoardError::ColumnFull { column })
                            );
                            prop_assert_eq!(session.active_seat(), Some(seat));
                        }
                    }
                }
                None => {
                    for seat in Seat::ALL {
                        prop_assert_eq!(
                            session.submit_move(seat, column),
                            Err(MoveError::GameAlreadyFinished)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn column_takes_exactly_height_pieces(
        rows in 1usize..10,
        cols in 1usize..10,
        pick in 0usize..10,
    ) {
        let column = pick % cols;
        let mut board = Board::with_size(rows, cols).unwrap();
        for i in 0..rows {
            let seat = if i % 2 == 0 { Seat::Red } else { Seat::Yellow };
            prop_assert_eq!(board.drop_piece(column, seat), Ok(rows - 1 - i));
        }
        prop_assert_eq!(
            board.drop_piece(column, Seat::Red),
            Err(BoardError::ColumnFull { column })
        );
    }
}

#[test]
fn standard_dimensions() {
    let board = Board::new();
    assert_eq!((board.rows(), board.cols()), (ROWS, COLS));
}

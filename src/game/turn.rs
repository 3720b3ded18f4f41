use crate::error::MoveError;

use super::board::Board;
use super::rules::{GameResult, RuleEngine};
use super::seat::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    WaitingFor(Seat),
    Finished(GameResult),
}

/// Tracks whose turn it is and gates every move through the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    state: TurnState,
    moves_played: usize,
}

impl TurnController {
    /// Red is always awaited first.
    pub fn new() -> Self {
        TurnController {
            state: TurnState::WaitingFor(Seat::Red),
            moves_played: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Seat expected to move, or `None` once the game is over
    pub fn active_seat(&self) -> Option<Seat> {
        match self.state {
            TurnState::WaitingFor(seat) => Some(seat),
            TurnState::Finished(_) => None,
        }
    }

    pub fn result(&self) -> GameResult {
        match self.state {
            TurnState::WaitingFor(_) => GameResult::InProgress,
            TurnState::Finished(result) => result,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, TurnState::Finished(_))
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Validate the seat, apply the move and advance. A rejected move leaves
    /// both the board and the controller untouched.
    pub fn submit_move(
        &mut self,
        board: &mut Board,
        rules: &RuleEngine,
        seat: Seat,
        column: usize,
    ) -> Result<(usize, GameResult), MoveError> {
        let expected = match self.state {
            TurnState::Finished(_) => return Err(MoveError::GameAlreadyFinished),
            TurnState::WaitingFor(expected) => expected,
        };
        if seat != expected {
            return Err(MoveError::NotYourTurn { seat, expected });
        }

        let (row, result) = rules.apply_move(board, seat, column)?;
        self.moves_played += 1;
        self.state = match result {
            GameResult::InProgress => TurnState::WaitingFor(seat.other()),
            terminal => TurnState::Finished(terminal),
        };
        Ok((row, result))
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn setup() -> (Board, RuleEngine, TurnController) {
        (Board::new(), RuleEngine::default(), TurnController::new())
    }

    #[test]
    fn test_initial_state() {
        let (_, _, turns) = setup();
        assert_eq!(turns.state(), TurnState::WaitingFor(Seat::Red));
        assert_eq!(turns.active_seat(), Some(Seat::Red));
        assert_eq!(turns.result(), GameResult::InProgress);
        assert_eq!(turns.moves_played(), 0);
    }

    #[test]
    fn test_alternates_after_in_progress() {
        let (mut board, rules, mut turns) = setup();
        turns.submit_move(&mut board, &rules, Seat::Red, 3).unwrap();
        assert_eq!(turns.active_seat(), Some(Seat::Yellow));
        turns.submit_move(&mut board, &rules, Seat::Yellow, 3).unwrap();
        assert_eq!(turns.active_seat(), Some(Seat::Red));
        assert_eq!(turns.moves_played(), 2);
    }

    #[test]
    fn test_rejects_wrong_seat() {
        let (mut board, rules, mut turns) = setup();
        let err = turns
            .submit_move(&mut board, &rules, Seat::Yellow, 0)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                seat: Seat::Yellow,
                expected: Seat::Red
            }
        );
        assert_eq!(board.piece_count(), 0);
        assert_eq!(turns.active_seat(), Some(Seat::Red));
    }

    #[test]
    fn test_board_error_keeps_turn() {
        let (mut board, rules, mut turns) = setup();
        let err = turns.submit_move(&mut board, &rules, Seat::Red, 9).unwrap_err();
        assert!(matches!(err, MoveError::Board(BoardError::InvalidColumn { .. })));
        assert_eq!(turns.active_seat(), Some(Seat::Red));
        assert_eq!(turns.moves_played(), 0);
    }

    #[test]
    fn test_finishes_on_win_and_rejects_further_moves() {
        let (mut board, rules, mut turns) = setup();
        for _ in 0..3 {
            turns.submit_move(&mut board, &rules, Seat::Red, 3).unwrap();
            turns.submit_move(&mut board, &rules, Seat::Yellow, 0).unwrap();
        }
        let (_, result) = turns.submit_move(&mut board, &rules, Seat::Red, 3).unwrap();
        assert_eq!(result, GameResult::Win(Seat::Red));
        assert_eq!(turns.state(), TurnState::Finished(GameResult::Win(Seat::Red)));
        assert_eq!(turns.active_seat(), None);

        for seat in Seat::ALL {
            assert_eq!(
                turns.submit_move(&mut board, &rules, seat, 1),
                Err(MoveError::GameAlreadyFinished)
            );
        }
    }
}

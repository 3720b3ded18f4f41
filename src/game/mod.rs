//! Core Connect Four game logic: board, seats, rules, turn control and the
//! session that ties them together.

mod board;
mod rules;
mod seat;
mod session;
mod turn;

pub use board::{Board, Cell, COLS, ROWS};
pub use rules::{GameResult, RuleEngine, WIN_LENGTH};
pub use seat::Seat;
pub use session::{GameConfig, GameSession, MoveReport, ReplayMove, SeatConfig, SessionSnapshot};
pub use turn::{TurnController, TurnState};

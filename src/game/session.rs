use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{selector_for, Difficulty, MoveSelector, SelectorKind};
use crate::error::{MoveError, SessionError};

use super::board::{Board, COLS, ROWS};
use super::rules::{GameResult, RuleEngine, WIN_LENGTH};
use super::seat::Seat;
use super::turn::TurnController;

/// Board dimensions and win length for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            win_length: WIN_LENGTH,
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "controller", rename_all = "lowercase")]
pub enum SeatConfig {
    #[default]
    Human,
    Computer {
        #[serde(default)]
        selector: SelectorKind,
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl SeatConfig {
    pub fn computer(selector: SelectorKind, difficulty: Difficulty) -> Self {
        SeatConfig::Computer {
            selector,
            difficulty,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, SeatConfig::Human)
    }
}

impl fmt::Display for SeatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatConfig::Human => f.write_str("human"),
            SeatConfig::Computer {
                selector,
                difficulty,
            } => write!(f, "{selector} ({difficulty})"),
        }
    }
}

/// A pre-played move fed through the normal move path when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayMove {
    /// Played by whichever seat is on move.
    Column(usize),
    /// Played by an explicit seat, so recorded out-of-turn entries are caught.
    Seated { seat: Seat, column: usize },
}

impl From<usize> for ReplayMove {
    fn from(column: usize) -> Self {
        ReplayMove::Column(column)
    }
}

impl From<(Seat, usize)> for ReplayMove {
    fn from((seat, column): (Seat, usize)) -> Self {
        ReplayMove::Seated { seat, column }
    }
}

/// Emitted after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub seat: Seat,
    pub column: usize,
    pub row: usize,
    pub result: GameResult,
    /// Seat now on move, `None` once the game is over.
    pub next: Option<Seat>,
}

/// Serializable view of a session for collaborators that resync wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Vec<Vec<u8>>,
    pub next_on_move: Option<Seat>,
    pub result: GameResult,
    pub moves: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_cells: Option<Vec<(usize, usize)>>,
}

/// One game: owns the board, the rules, the turn controller and the seat
/// configurations. Discard it and start a new one for the next game.
pub struct GameSession {
    board: Board,
    rules: RuleEngine,
    turns: TurnController,
    seats: [SeatConfig; 2],
    selectors: [Option<Box<dyn MoveSelector>>; 2],
    history: Vec<(Seat, usize)>,
    last_drop: Option<(usize, usize)>,
}

impl GameSession {
    /// Start a session, replaying `replay` in order. The first rejected
    /// replay entry aborts construction and reports its index.
    pub fn start(
        game: &GameConfig,
        red: SeatConfig,
        yellow: SeatConfig,
        replay: &[ReplayMove],
    ) -> Result<Self, SessionError> {
        Self::start_seeded(game, red, yellow, replay, None)
    }

    /// Like [`GameSession::start`], but random selectors draw from `seed`
    /// so the whole game can be reproduced.
    pub fn start_seeded(
        game: &GameConfig,
        red: SeatConfig,
        yellow: SeatConfig,
        replay: &[ReplayMove],
        seed: Option<u64>,
    ) -> Result<Self, SessionError> {
        let rules = RuleEngine::new(game.win_length)?;
        let board = Board::with_size(game.rows, game.cols)?;
        rules.check_fits(&board)?;
        let build_selector = |config: &SeatConfig, seat: Seat| match config {
            SeatConfig::Human => None,
            SeatConfig::Computer { selector, .. } => {
                let stream = seed.map(|seed| seat_seed(seed, seat));
                Some(selector_for(*selector, rules, stream))
            }
        };

        let mut session = GameSession {
            board,
            rules,
            turns: TurnController::new(),
            selectors: [
                build_selector(&red, Seat::Red),
                build_selector(&yellow, Seat::Yellow),
            ],
            seats: [red, yellow],
            history: Vec::new(),
            last_drop: None,
        };
        info!(
            rows = game.rows,
            cols = game.cols,
            win_length = game.win_length,
            %red,
            %yellow,
            replay = replay.len(),
            ?seed,
            "session started"
        );

        for (index, entry) in replay.iter().enumerate() {
            let (seat, column) = match *entry {
                ReplayMove::Column(column) => {
                    let seat = session
                        .turns
                        .active_seat()
                        .ok_or(SessionError::Replay {
                            index,
                            source: MoveError::GameAlreadyFinished,
                        })?;
                    (seat, column)
                }
                ReplayMove::Seated { seat, column } => (seat, column),
            };
            session
                .submit_move(seat, column)
                .map_err(|source| SessionError::Replay { index, source })?;
        }

        Ok(session)
    }

    /// Human-vs-human session on the standard board.
    pub fn standard() -> Self {
        GameSession {
            board: Board::new(),
            rules: RuleEngine::default(),
            turns: TurnController::new(),
            seats: [SeatConfig::Human; 2],
            selectors: [None, None],
            history: Vec::new(),
            last_drop: None,
        }
    }

    /// Submit `seat`'s drop into `column`.
    pub fn submit_move(&mut self, seat: Seat, column: usize) -> Result<MoveReport, MoveError> {
        let (row, result) = self
            .turns
            .submit_move(&mut self.board, &self.rules, seat, column)?;
        self.history.push((seat, column));
        self.last_drop = Some((row, column));

        let report = MoveReport {
            seat,
            column,
            row,
            result,
            next: self.turns.active_seat(),
        };
        debug!(%seat, column, row, ?result, "move accepted");
        if result.is_terminal() {
            info!(?result, moves = self.history.len(), "game finished");
        }
        Ok(report)
    }

    /// Let the computer seat on move pick and play its column.
    pub fn play_computer_turn(&mut self) -> Result<MoveReport, SessionError> {
        let seat = self
            .turns
            .active_seat()
            .ok_or(MoveError::GameAlreadyFinished)?;
        let (difficulty, selector) = match (
            &self.seats[seat.index()],
            self.selectors[seat.index()].as_mut(),
        ) {
            (SeatConfig::Computer { difficulty, .. }, Some(selector)) => (*difficulty, selector),
            _ => return Err(SessionError::NotComputerSeat(seat)),
        };

        let column = selector.choose(&self.board, seat, difficulty)?;
        Ok(self.submit_move(seat, column)?)
    }

    /// Play computer turns until a human seat is on move or the game ends.
    pub fn play_until_human(&mut self) -> Result<Vec<MoveReport>, SessionError> {
        let mut reports = Vec::new();
        while let Some(seat) = self.turns.active_seat() {
            if self.seat_config(seat).is_human() {
                break;
            }
            reports.push(self.play_computer_turn()?);
        }
        Ok(reports)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn result(&self) -> GameResult {
        self.turns.result()
    }

    pub fn is_finished(&self) -> bool {
        self.turns.is_finished()
    }

    /// Seat expected to move, `None` once the game is over
    pub fn active_seat(&self) -> Option<Seat> {
        self.turns.active_seat()
    }

    pub fn seat_config(&self, seat: Seat) -> SeatConfig {
        self.seats[seat.index()]
    }

    /// Accepted moves in order
    pub fn history(&self) -> &[(Seat, usize)] {
        &self.history
    }

    /// Cells of the winning line, if the game was won
    pub fn winning_line(&self) -> Option<Vec<(usize, usize)>> {
        match (self.result(), self.last_drop) {
            (GameResult::Win(_), Some((row, col))) => {
                self.rules.winning_line(&self.board, row, col)
            }
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.to_matrix(),
            next_on_move: self.active_seat(),
            result: self.result(),
            moves: self.history.iter().map(|&(_, column)| column).collect(),
            winning_cells: self.winning_line(),
        }
    }
}

/// Give each seat its own stream so two random seats don't mirror each other.
fn seat_seed(seed: u64, seat: Seat) -> u64 {
    seed ^ (seat.index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("rules", &self.rules)
            .field("turns", &self.turns)
            .field("seats", &self.seats)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

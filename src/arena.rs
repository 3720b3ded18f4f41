//! Computer-vs-computer matches for comparing selectors and difficulties.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SessionError;
use crate::game::{GameConfig, GameResult, GameSession, Seat, SeatConfig};

/// Arena run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Alternate which contestant plays Red each game.
    pub swap_seats: bool,
    /// Base seed for random selectors. Game `i` uses `seed + i`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            swap_seats: true,
            seed: None,
        }
    }
}

/// Outcome of a single arena game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub moves: usize,
}

/// Tallies from the first contestant's point of view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArenaStats {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl ArenaStats {
    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }
}

/// Play one game where both seats are computers.
pub fn play_game(
    game: &GameConfig,
    red: SeatConfig,
    yellow: SeatConfig,
    seed: Option<u64>,
) -> Result<GameRecord, SessionError> {
    let mut session = GameSession::start_seeded(game, red, yellow, &[], seed)?;
    while !session.is_finished() {
        session.play_computer_turn()?;
    }
    Ok(GameRecord {
        result: session.result(),
        moves: session.history().len(),
    })
}

/// Play `config.games` games between two computer contestants.
pub fn run_arena(
    game: &GameConfig,
    first: SeatConfig,
    second: SeatConfig,
    config: &ArenaConfig,
) -> Result<ArenaStats, SessionError> {
    let mut stats = ArenaStats::default();

    for index in 0..config.games {
        let first_seat = if config.swap_seats && index % 2 == 1 {
            Seat::Yellow
        } else {
            Seat::Red
        };
        let (red, yellow) = match first_seat {
            Seat::Red => (first, second),
            Seat::Yellow => (second, first),
        };

        let seed = config.seed.map(|seed| seed.wrapping_add(index as u64));
        let record = play_game(game, red, yellow, seed)?;
        stats.games += 1;
        stats.total_moves += record.moves;
        match record.result.winner() {
            Some(seat) if seat == first_seat => stats.first_wins += 1,
            Some(_) => stats.second_wins += 1,
            None => stats.draws += 1,
        }
        info!(
            game = index + 1,
            result = ?record.result,
            moves = record.moves,
            "arena game finished"
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{Difficulty, SelectorKind};

    fn random() -> SeatConfig {
        SeatConfig::computer(SelectorKind::Random, Difficulty::Easy)
    }

    #[test]
    fn test_play_game_finishes() {
        let record = play_game(&GameConfig::default(), random(), random(), Some(3)).unwrap();
        assert!(record.result.is_terminal());
        assert!(record.moves >= 7 && record.moves <= 42);
    }

    #[test]
    fn test_human_seat_is_rejected() {
        let err = play_game(&GameConfig::default(), random(), SeatConfig::Human, None).unwrap_err();
        assert_eq!(err, SessionError::NotComputerSeat(Seat::Yellow));
    }

    #[test]
    fn test_stats_add_up() {
        let config = ArenaConfig {
            games: 6,
            swap_seats: true,
            seed: None,
        };
        let stats = run_arena(&GameConfig::default(), random(), random(), &config).unwrap();
        assert_eq!(stats.games, 6);
        assert_eq!(stats.first_wins + stats.second_wins + stats.draws, 6);
        let total = stats.first_win_rate() + stats.second_win_rate() + stats.draw_rate();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_search_beats_random_in_arena() {
        let search = SeatConfig::computer(SelectorKind::Minimax, Difficulty::Easy);
        let config = ArenaConfig {
            games: 10,
            swap_seats: true,
            seed: Some(2024),
        };
        let stats = run_arena(&GameConfig::default(), search, random(), &config).unwrap();
        assert!(
            stats.first_wins >= 7,
            "search should dominate random, got {stats:?}"
        );
    }

    #[test]
    fn test_seeded_arena_is_reproducible() {
        let config = ArenaConfig {
            games: 4,
            swap_seats: true,
            seed: Some(99),
        };
        let game = GameConfig::default();
        let first = run_arena(&game, random(), random(), &config).unwrap();
        let second = run_arena(&game, random(), random(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_stats_rates() {
        let stats = ArenaStats::default();
        assert_eq!(stats.first_win_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectError;
use crate::game::{Board, RuleEngine, Seat};

use super::random::RandomSelector;
use super::search::{CompetitiveSelector, MinimaxSelector, NegascoutSelector};

/// Strength of a computer seat; maps to search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected 'easy', 'medium' or 'hard')"
            )),
        }
    }
}

/// Which strategy drives a computer seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Random,
    Minimax,
    Negascout,
    #[default]
    Competitive,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectorKind::Random => "random",
            SelectorKind::Minimax => "minimax",
            SelectorKind::Negascout => "negascout",
            SelectorKind::Competitive => "competitive",
        })
    }
}

impl FromStr for SelectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(SelectorKind::Random),
            "minimax" => Ok(SelectorKind::Minimax),
            "negascout" => Ok(SelectorKind::Negascout),
            "competitive" => Ok(SelectorKind::Competitive),
            other => Err(format!(
                "unknown selector '{other}' (expected 'random', 'minimax', 'negascout' or 'competitive')"
            )),
        }
    }
}

/// Universal interface for computer move selection.
pub trait MoveSelector: Send {
    /// Pick a column that is not full for `seat` to play on `board`.
    fn choose(
        &mut self,
        board: &Board,
        seat: Seat,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError>;

    /// Return the selector's display name.
    fn name(&self) -> &str;
}

/// Build the selector for a seat configuration. `seed` only affects
/// selectors that use randomness.
pub fn selector_for(
    kind: SelectorKind,
    rules: RuleEngine,
    seed: Option<u64>,
) -> Box<dyn MoveSelector> {
    match kind {
        SelectorKind::Random => Box::new(match seed {
            Some(seed) => RandomSelector::with_seed(seed),
            None => RandomSelector::new(),
        }),
        SelectorKind::Minimax => Box::new(MinimaxSelector::new(rules)),
        SelectorKind::Negascout => Box::new(NegascoutSelector::new(rules)),
        SelectorKind::Competitive => Box::new(CompetitiveSelector::new(rules)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 3);
        assert_eq!(Difficulty::Medium.depth(), 5);
        assert_eq!(Difficulty::Hard.depth(), 7);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_selector_kind_parse_roundtrip() {
        for kind in [
            SelectorKind::Random,
            SelectorKind::Minimax,
            SelectorKind::Negascout,
            SelectorKind::Competitive,
        ] {
            assert_eq!(kind.to_string().parse::<SelectorKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_selector_for_names() {
        let rules = RuleEngine::default();
        assert_eq!(selector_for(SelectorKind::Random, rules, None).name(), "Random");
        assert_eq!(selector_for(SelectorKind::Minimax, rules, None).name(), "Minimax");
        assert_eq!(selector_for(SelectorKind::Negascout, rules, None).name(), "Negascout");
        assert_eq!(
            selector_for(SelectorKind::Competitive, rules, None).name(),
            "Competitive"
        );
    }

    #[test]
    fn test_seeded_random_selector_is_reproducible() {
        let rules = RuleEngine::default();
        let board = Board::new();
        let picks = |seed| {
            let mut selector = selector_for(SelectorKind::Random, rules, Some(seed));
            (0..10)
                .map(|_| selector.choose(&board, Seat::Red, Difficulty::Easy).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let mut board = Board::with_size(1, 1).unwrap();
        board.drop_piece(0, Seat::Red).unwrap();
        let rules = RuleEngine::default();
        for kind in [
            SelectorKind::Random,
            SelectorKind::Minimax,
            SelectorKind::Negascout,
            SelectorKind::Competitive,
        ] {
            let mut selector = selector_for(kind, rules, Some(1));
            assert_eq!(
                selector.choose(&board, Seat::Yellow, Difficulty::Easy),
                Err(SelectError::NoLegalMove)
            );
        }
    }
}

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::SelectError;
use crate::game::{Board, Seat};

use super::selector::{Difficulty, MoveSelector};

/// A selector that picks uniformly at random from the open columns.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn choose(
        &mut self,
        board: &Board,
        seat: Seat,
        _difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return Err(SelectError::NoLegalMove);
        }
        let column = columns[self.rng.random_range(0..columns.len())];
        debug!(selector = "random", %seat, column, "selected column");
        Ok(column)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

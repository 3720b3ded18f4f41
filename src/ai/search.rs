use tracing::debug;

use crate::error::SelectError;
use crate::game::{Board, GameResult, RuleEngine, Seat};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::selector::{Difficulty, MoveSelector};

const WIN_SCORE: i32 = 1_000_000;
const INFINITY: i32 = i32::MAX / 2;

/// Column ordering: center-first for better alpha-beta pruning.
/// Ties go to the left column, so 7 columns give [3, 2, 4, 1, 5, 0, 6].
pub fn center_order(cols: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by_key(|&col| ((2 * col) as isize - (cols as isize - 1)).abs());
    order
}

/// One search over a scratch copy of the board. Moves are applied and
/// lifted in place instead of cloning the board per node.
struct Search {
    rules: RuleEngine,
    heuristic: WindowHeuristic,
    order: Vec<usize>,
    nodes: u64,
}

impl Search {
    fn new(rules: RuleEngine, board: &Board, difficulty: Difficulty) -> Self {
        Search {
            rules,
            heuristic: WindowHeuristic::new(
                difficulty,
                board.rows(),
                board.cols(),
                rules.win_length(),
            ),
            order: center_order(board.cols()),
            nodes: 0,
        }
    }

    fn win_score(depth: usize) -> i32 {
        // Sooner wins (more depth left) score higher.
        WIN_SCORE + depth as i32
    }

    // --- Minimax with alpha-beta, scored from the root seat's perspective ---

    fn best_minimax(&mut self, board: &mut Board, seat: Seat, depth: usize) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;

        for i in 0..self.order.len() {
            let col = self.order[i];
            let alpha = best.map_or(-INFINITY, |(_, score)| score);
            let Some(score) = self.minimax_move(board, seat, seat, col, depth, alpha, INFINITY)
            else {
                continue;
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        best.map(|(col, _)| col)
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax_move(
        &mut self,
        board: &mut Board,
        to_move: Seat,
        root: Seat,
        col: usize,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        let (_, result) = self.rules.apply_move(board, to_move, col).ok()?;
        let score = match result {
            GameResult::Win(winner) if winner == root => Self::win_score(depth),
            GameResult::Win(_) => -Self::win_score(depth),
            GameResult::Draw => 0,
            GameResult::InProgress => {
                self.minimax(board, to_move.other(), root, depth - 1, alpha, beta)
            }
        };
        board.lift_piece(col);
        Some(score)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Seat,
        root: Seat,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.heuristic.evaluate(board, root);
        }

        let maximizing = to_move == root;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for i in 0..self.order.len() {
            let col = self.order[i];
            let Some(score) = self.minimax_move(board, to_move, root, col, depth, alpha, beta)
            else {
                continue;
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }

    // --- Negascout (principal variation search), scored for the side to move ---

    fn best_negascout(&mut self, board: &mut Board, seat: Seat, depth: usize) -> Option<usize> {
        let mut best = None;
        let mut alpha = -INFINITY;

        for i in 0..self.order.len() {
            let col = self.order[i];
            if board.is_column_full(col) {
                continue;
            }
            let score = if best.is_none() {
                self.negascout_move(board, seat, col, depth, alpha, INFINITY)
            } else {
                match self.negascout_move(board, seat, col, depth, alpha, alpha + 1) {
                    Some(probe) if probe > alpha => {
                        self.negascout_move(board, seat, col, depth, alpha, INFINITY)
                    }
                    other => other,
                }
            };
            let Some(score) = score else { continue };
            if best.is_none() || score > alpha {
                alpha = score;
                best = Some(col);
            }
        }

        best
    }

    fn negascout_move(
        &mut self,
        board: &mut Board,
        to_move: Seat,
        col: usize,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> Option<i32> {
        let (_, result) = self.rules.apply_move(board, to_move, col).ok()?;
        let score = match result {
            // Only the mover can complete a line with their own drop.
            GameResult::Win(_) => Self::win_score(depth),
            GameResult::Draw => 0,
            GameResult::InProgress => {
                -self.negascout(board, to_move.other(), depth - 1, -beta, -alpha)
            }
        };
        board.lift_piece(col);
        Some(score)
    }

    fn negascout(
        &mut self,
        board: &mut Board,
        to_move: Seat,
        depth: usize,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.heuristic.evaluate(board, to_move);
        }

        let mut best = -INFINITY;
        let mut first = true;

        for i in 0..self.order.len() {
            let col = self.order[i];
            if board.is_column_full(col) {
                continue;
            }
            let score = if first {
                self.negascout_move(board, to_move, col, depth, alpha, beta)
            } else {
                // Null-window probe; re-search only when it beats alpha.
                match self.negascout_move(board, to_move, col, depth, alpha, alpha + 1) {
                    Some(probe) if probe > alpha && probe < beta => {
                        self.negascout_move(board, to_move, col, depth, alpha, beta)
                    }
                    other => other,
                }
            };
            let Some(score) = score else { continue };
            first = false;

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Minimax with alpha-beta pruning to the difficulty's depth.
pub struct MinimaxSelector {
    rules: RuleEngine,
}

impl MinimaxSelector {
    pub fn new(rules: RuleEngine) -> Self {
        MinimaxSelector { rules }
    }
}

impl MoveSelector for MinimaxSelector {
    fn choose(
        &mut self,
        board: &Board,
        seat: Seat,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        let mut search = Search::new(self.rules, board, difficulty);
        let mut scratch = board.clone();
        let column = search
            .best_minimax(&mut scratch, seat, difficulty.depth())
            .ok_or(SelectError::NoLegalMove)?;
        debug!(
            selector = "minimax",
            %seat,
            %difficulty,
            column,
            nodes = search.nodes,
            "selected column"
        );
        Ok(column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Negascout search to the difficulty's depth.
pub struct NegascoutSelector {
    rules: RuleEngine,
}

impl NegascoutSelector {
    pub fn new(rules: RuleEngine) -> Self {
        NegascoutSelector { rules }
    }
}

impl MoveSelector for NegascoutSelector {
    fn choose(
        &mut self,
        board: &Board,
        seat: Seat,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        let mut search = Search::new(self.rules, board, difficulty);
        let mut scratch = board.clone();
        let column = search
            .best_negascout(&mut scratch, seat, difficulty.depth())
            .ok_or(SelectError::NoLegalMove)?;
        debug!(
            selector = "negascout",
            %seat,
            %difficulty,
            column,
            nodes = search.nodes,
            "selected column"
        );
        Ok(column)
    }

    fn name(&self) -> &str {
        "Negascout"
    }
}

/// Even depths search with negascout, odd depths with minimax.
pub struct CompetitiveSelector {
    minimax: MinimaxSelector,
    negascout: NegascoutSelector,
}

impl CompetitiveSelector {
    pub fn new(rules: RuleEngine) -> Self {
        CompetitiveSelector {
            minimax: MinimaxSelector::new(rules),
            negascout: NegascoutSelector::new(rules),
        }
    }
}

impl MoveSelector for CompetitiveSelector {
    fn choose(
        &mut self,
        board: &Board,
        seat: Seat,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        if difficulty.depth() % 2 == 0 {
            self.negascout.choose(board, seat, difficulty)
        } else {
            self.minimax.choose(board, seat, difficulty)
        }
    }

    fn name(&self) -> &str {
        "Competitive"
    }
}

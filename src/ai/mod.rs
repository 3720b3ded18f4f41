mod heuristic;
mod random;
mod search;
mod selector;

pub use heuristic::{all_windows, Heuristic, WindowHeuristic};
pub use random::RandomSelector;
pub use search::{center_order, CompetitiveSelector, MinimaxSelector, NegascoutSelector};
pub use selector::{selector_for, Difficulty, MoveSelector, SelectorKind};

//! Search: move ordering, depth-bounded minimax with alpha-beta pruning.

mod alphabeta;
mod ordering;
mod searcher;
mod types;

pub use ordering::ordered_moves;
pub use searcher::Searcher;
pub use types::{
    mate_distance, Score, SearchLimits, SearchStats, DEFAULT_DEPTH, DRAW_SCORE, INFINITY,
    MATE_SCORE, MATE_THRESHOLD, MAX_DEPTH, MIN_DEPTH,
};

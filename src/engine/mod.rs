//! Search-and-evaluation engine
//!
//! This module contains the solver proper:
//! - Piece-square tables and static evaluation
//! - Move ordering
//! - Alpha-beta search with mate-distance scoring

pub mod eval;
pub mod pst;
pub mod search;

pub use eval::{capture_value, evaluate_board, is_endgame, move_value, piece_value};
pub use pst::table_value;
pub use search::{
    ordered_moves, Score, SearchLimits, SearchStats, Searcher, DRAW_SCORE, INFINITY, MATE_SCORE,
    MATE_THRESHOLD,
};

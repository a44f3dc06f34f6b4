//! Search limits, stats, and score constants.

use std::time::Duration;

/// Evaluation score, positive favours White
pub type Score = i32;

pub const INFINITY: Score = i32::MAX;
/// Score of a side that has been mated at the node being scored
pub const MATE_SCORE: Score = 1_000_000_000;
/// Any score beyond this encodes a forced mate `MATE_SCORE - |score|` plies away
pub const MATE_THRESHOLD: Score = 999_000_000;
pub const DRAW_SCORE: Score = 0;

pub const DEFAULT_DEPTH: u32 = 3;
pub const MIN_DEPTH: u32 = 1;
pub const MAX_DEPTH: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies to search, at least `MIN_DEPTH`
    pub depth: u32,
}

impl SearchLimits {
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Statistics of one `next_move` call
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Root score of the chosen move
    pub score: Score,
}

/// Plies until mate for a mate score, `None` for ordinary scores
pub fn mate_distance(score: Score) -> Option<Score> {
    (score.abs() > MATE_THRESHOLD).then(|| MATE_SCORE - score.abs())
}

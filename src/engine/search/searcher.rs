//! Searcher: root move selection and search entry point.

use std::time::Instant;

use log::{debug, trace};
use shakmaty::{Color, Move};

use crate::core::{to_uci, Game};
use crate::error::{EngineError, EngineResult};

use super::ordering::ordered_moves;
use super::types::{Score, SearchStats, DRAW_SCORE, INFINITY, MIN_DEPTH};

/// Depth-first searcher; owns the statistics of its latest `next_move` call
#[derive(Debug, Default)]
pub struct Searcher {
    pub(super) stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Searcher {
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent `next_move`
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the side to move, searched `depth` plies deep.
    ///
    /// The caller must make sure the game is not over; a position without
    /// legal moves yields `EngineError::NoLegalMoves`.
    pub fn next_move(&mut self, depth: u32, game: &mut Game) -> EngineResult<(Move, SearchStats)> {
        let depth = depth.max(MIN_DEPTH);
        self.stats = SearchStats {
            depth,
            ..SearchStats::default()
        };
        let start = Instant::now();

        let (mv, score) = self.root(depth, game)?;

        self.stats.elapsed = start.elapsed();
        self.stats.score = score;
        debug!(
            "next move {} depth {} nodes {} time {:?} score {}",
            to_uci(&mv),
            depth,
            self.stats.nodes,
            self.stats.elapsed,
            score
        );
        Ok((mv, self.stats.clone()))
    }

    /// Highest scoring move for the side to move
    pub fn search_root(&mut self, depth: u32, game: &mut Game) -> EngineResult<Move> {
        self.root(depth.max(MIN_DEPTH), game).map(|(mv, _)| mv)
    }

    /// Root loop. Ties go to the later move in the ordered list.
    fn root(&mut self, depth: u32, game: &mut Game) -> EngineResult<(Move, Score)> {
        let maximize = game.turn() == Color::White;
        let mut best_score = if maximize { -INFINITY } else { INFINITY };
        let moves = ordered_moves(game.position())?;
        let mut best_move = moves.first().cloned().ok_or(EngineError::NoLegalMoves)?;

        for mv in moves {
            let value = {
                let mut child = game.scoped(&mv);
                if child.can_claim_draw() {
                    DRAW_SCORE
                } else {
                    self.search(depth - 1, &mut child, -INFINITY, INFINITY, !maximize)?
                }
            };
            trace!("root {} scored {}", to_uci(&mv), value);

            let improves = if maximize {
                value >= best_score
            } else {
                value <= best_score
            };
            if improves {
                best_score = value;
                best_move = mv;
            }
        }

        Ok((best_move, best_score))
    }
}

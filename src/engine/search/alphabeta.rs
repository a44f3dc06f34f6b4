//! Depth-bounded minimax with alpha-beta pruning.

use shakmaty::Position;

use crate::core::Game;
use crate::engine::eval::evaluate_board;
use crate::error::EngineResult;

use super::ordering::ordered_moves;
use super::searcher::Searcher;
use super::types::{Score, DRAW_SCORE, INFINITY, MATE_SCORE, MATE_THRESHOLD};

/// Move a mate score one ply further from the mate
#[inline]
fn step_from_mate(score: Score) -> Score {
    if score > MATE_THRESHOLD {
        score - 1
    } else if score < -MATE_THRESHOLD {
        score + 1
    } else {
        score
    }
}

impl Searcher {
    /// Score `game` searching `depth` plies, White-positive.
    ///
    /// `maximizing` must be true iff White is to move. On a cutoff the running
    /// extremum is returned as is. The game is left unchanged.
    pub fn search(
        &mut self,
        depth: u32,
        game: &mut Game,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> EngineResult<Score> {
        self.stats.nodes += 1;

        if game.is_checkmate() {
            return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
        }
        if game.is_game_over() {
            return Ok(DRAW_SCORE);
        }
        if depth == 0 {
            return Ok(evaluate_board(game.position().board()));
        }

        let moves = ordered_moves(game.position())?;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let score = {
                let mut child = game.scoped(mv);
                self.search(depth - 1, &mut child, alpha, beta, !maximizing)?
            };
            let score = step_from_mate(score);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                return Ok(best);
            }
        }

        Ok(best)
    }
}

//! Move ordering by static move value.

use shakmaty::{Chess, Color, Move, Position};

use crate::engine::eval::{is_endgame, move_value};
use crate::error::EngineResult;

/// Legal moves, most promising first for the side to move.
///
/// White's moves sort by descending value, Black's by ascending value. The
/// sort is stable, so equal values keep the generator's order.
pub fn ordered_moves(pos: &Chess) -> EngineResult<Vec<Move>> {
    let endgame = is_endgame(pos.board());
    let mut scored = pos
        .legal_moves()
        .into_iter()
        .map(|mv| move_value(pos, &mv, endgame).map(|value| (mv, value)))
        .collect::<EngineResult<Vec<_>>>()?;

    match pos.turn() {
        Color::White => scored.sort_by(|a, b| b.1.cmp(&a.1)),
        Color::Black => scored.sort_by(|a, b| a.1.cmp(&b.1)),
    }
    Ok(scored.into_iter().map(|(mv, _)| mv).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{to_uci, Game};

    #[test]
    fn test_ordering_keeps_every_legal_move() {
        let pos = Chess::default();
        let ordered = ordered_moves(&pos).unwrap();
        assert_eq!(ordered.len(), 20);
        for mv in pos.legal_moves() {
            assert!(ordered.contains(&mv));
        }
    }

    #[test]
    fn test_promotions_come_first() {
        let game = Game::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let ordered = ordered_moves(game.position()).unwrap();
        assert!(ordered[..4].iter().all(|mv| mv.is_promotion()));
        assert!(ordered[4..].iter().all(|mv| !mv.is_promotion()));
    }

    #[test]
    fn test_development_leads_at_start() {
        // knights to c3/f3 gain 50, central double pushes gain 40
        let ordered: Vec<String> = ordered_moves(&Chess::default())
            .unwrap()
            .iter()
            .map(to_uci)
            .collect();
        let mut knights = ordered[..2].to_vec();
        knights.sort();
        assert_eq!(knights, ["b1c3", "g1f3"]);
        let mut pawns = ordered[2..4].to_vec();
        pawns.sort();
        assert_eq!(pawns, ["d2d4", "e2e4"]);
    }
}

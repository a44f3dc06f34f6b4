//! Move helpers on top of `shakmaty::Move`
//!
//! shakmaty encodes castling as "king takes own rook", so `Move::to()` of a
//! castle is the rook square. Evaluation wants the square the king actually
//! lands on, and the protocol wants standard UCI text.

use shakmaty::{CastlingMode, File, Move, Square};

/// Square the moving piece ends up on (king target square for castling)
#[inline]
pub fn destination(mv: &Move) -> Square {
    match *mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        _ => mv.to(),
    }
}

/// Standard UCI notation, e.g. `e2e4`, `e1g1`, `a7a8q`
pub fn to_uci(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Role;

    #[test]
    fn test_castle_destination_is_king_target() {
        let short = Move::Castle { king: Square::E1, rook: Square::H1 };
        let long = Move::Castle { king: Square::E8, rook: Square::A8 };
        assert_eq!(destination(&short), Square::G1);
        assert_eq!(destination(&long), Square::C8);
        assert_eq!(to_uci(&short), "e1g1");
    }

    #[test]
    fn test_normal_destination() {
        let mv = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
            promotion: None,
        };
        assert_eq!(destination(&mv), Square::E4);
        assert_eq!(to_uci(&mv), "e2e4");
    }
}

//! Static evaluation: material plus piece-square tables
//!
//! Scores are from White's point of view. `move_value` is a cheap estimate used
//! only to order moves; leaves are scored with `evaluate_board`.

use shakmaty::{Board, Chess, Color, Move, Position, Role};

use super::pst::table_value;
use super::search::{Score, INFINITY};
use crate::core::moves::destination;
use crate::error::{EngineError, EngineResult};

/// Material value of a piece type in centipawns
#[inline]
pub const fn piece_value(role: Role) -> Score {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 20000,
    }
}

#[inline]
fn signed(color: Color, value: Score) -> Score {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// No queens left, or both queens with at most one minor piece between the sides
pub fn is_endgame(board: &Board) -> bool {
    let queens = board.queens().count();
    let minors = (board.bishops() | board.knights()).count();
    queens == 0 || (queens == 2 && minors <= 1)
}

/// Material and positional balance of the whole board
pub fn evaluate_board(board: &Board) -> Score {
    let endgame = is_endgame(board);
    let mut total = 0;
    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            let value = piece_value(piece.role) + table_value(piece, square, endgame);
            total += signed(piece.color, value);
        }
    }
    total
}

/// Relative desirability of `mv` for ordering purposes.
///
/// Promotions sort first for the side making them. Everything else is the
/// positional gain of the moved piece plus the trade value of any capture.
pub fn move_value(pos: &Chess, mv: &Move, endgame: bool) -> EngineResult<Score> {
    if mv.is_promotion() {
        return Ok(signed(pos.turn(), INFINITY));
    }

    let from = mv.from().ok_or(EngineError::DropMove { to: mv.to() })?;
    let piece = pos
        .board()
        .piece_at(from)
        .ok_or(EngineError::EmptyOrigin { square: from })?;
    let position_change =
        table_value(piece, destination(mv), endgame) - table_value(piece, from, endgame);

    let capture = if mv.is_capture() {
        capture_value(pos, mv)?
    } else {
        0
    };

    Ok(signed(pos.turn(), capture + position_change))
}

/// Victim value minus attacker value; en passant always wins a pawn
pub fn capture_value(pos: &Chess, mv: &Move) -> EngineResult<Score> {
    if mv.is_en_passant() {
        return Ok(piece_value(Role::Pawn));
    }

    let from = mv.from().ok_or(EngineError::DropMove { to: mv.to() })?;
    let to = mv.to();
    let board = pos.board();
    match (board.piece_at(to), board.piece_at(from)) {
        (Some(victim), Some(attacker)) => Ok(piece_value(victim.role) - piece_value(attacker.role)),
        _ => Err(EngineError::CaptureWithoutPieces { from, to }),
    }
}

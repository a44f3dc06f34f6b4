//! Game state with move history
//!
//! `shakmaty::Chess` is a single position: it generates legal moves and knows
//! about checkmate, stalemate and insufficient material, but it has no undo
//! and no memory of earlier positions. `Game` keeps a stack of previous
//! positions and their Zobrist keys so the search can make and unmake moves
//! and ask repetition/fifty-move questions.

use std::ops::{Deref, DerefMut};

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Position, Role};

use crate::error::{EngineError, EngineResult};

fn position_key(pos: &Chess) -> u64 {
    let z: Zobrist64 = pos.zobrist_hash(EnPassantMode::Legal);
    z.0
}

/// Captures and pawn moves reset the halfmove clock
fn is_zeroing(mv: &Move) -> bool {
    mv.is_capture() || mv.role() == Role::Pawn
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Chess,
    /// Positions before each pushed move, with the move itself
    stack: Vec<(Chess, Move)>,
    /// Key of every position reached so far; the last one is the current position
    keys: Vec<u64>,
}

impl Game {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(position: Chess) -> Self {
        let key = position_key(&position);
        Game {
            position,
            stack: Vec::new(),
            keys: vec![key],
        }
    }

    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_owned(),
            reason,
        };
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e: shakmaty::fen::ParseFenError| invalid(e.to_string()))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self::from_position(position))
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Number of moves pushed since the game was created
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Zobrist key of the current position
    pub fn key(&self) -> u64 {
        self.keys.last().copied().unwrap_or_else(|| position_key(&self.position))
    }

    /// Apply a legal move. The move must come from `legal_moves()`.
    pub fn push(&mut self, mv: &Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.stack.push((previous, mv.clone()));
        self.keys.push(position_key(&self.position));
    }

    /// Undo the most recent move, restoring the exact previous position
    pub fn pop(&mut self) -> Option<Move> {
        let (previous, mv) = self.stack.pop()?;
        self.position = previous;
        self.keys.pop();
        Some(mv)
    }

    /// Apply a move for the lifetime of the returned guard.
    ///
    /// The guard dereferences to the game and undoes the move when dropped, so
    /// early returns and `?` never leave the position modified.
    pub fn scoped(&mut self, mv: &Move) -> PlayedMove<'_> {
        self.push(mv);
        PlayedMove { game: self }
    }

    /// Parse and apply a move in UCI notation
    pub fn push_uci(&mut self, text: &str) -> EngineResult<Move> {
        let illegal = || EngineError::IllegalMove(text.to_owned());
        let uci: UciMove = text.parse().map_err(|_| illegal())?;
        let mv = uci.to_move(&self.position).map_err(|_| illegal())?;
        if !self.position.is_legal(&mv) {
            return Err(illegal());
        }
        self.push(&mv);
        Ok(mv)
    }

    /// How often `key` occurred since the last irreversible move
    fn count_key(&self, key: u64) -> usize {
        let window = self.position.halfmoves() as usize + 1;
        self.keys.iter().rev().take(window).filter(|&&k| k == key).count()
    }

    /// Occurrences of the current position, the current one included
    pub fn repetition_count(&self) -> usize {
        self.count_key(self.key())
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.position.halfmoves() >= 150 && !self.position.legal_moves().is_empty()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= 5
    }

    /// Game over without any claim: mate, stalemate, dead position,
    /// seventy-five-move rule or fivefold repetition
    pub fn is_game_over(&self) -> bool {
        self.position.legal_moves().is_empty()
            || self.position.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
    }

    pub fn can_claim_fifty_moves(&self) -> bool {
        let legals = self.position.legal_moves();
        if legals.is_empty() {
            return false;
        }
        let halfmoves = self.position.halfmoves();
        if halfmoves >= 100 {
            return true;
        }
        halfmoves >= 99
            && legals.iter().filter(|mv| !is_zeroing(mv)).any(|mv| {
                let mut next = self.position.clone();
                next.play_unchecked(mv);
                next.halfmoves() >= 100 && !next.legal_moves().is_empty()
            })
    }

    pub fn can_claim_threefold_repetition(&self) -> bool {
        if self.repetition_count() >= 3 {
            return true;
        }
        self.position.legal_moves().iter().any(|mv| {
            let mut next = self.position.clone();
            next.play_unchecked(mv);
            self.count_key(position_key(&next)) >= 2
        })
    }

    pub fn can_claim_draw(&self) -> bool {
        self.can_claim_fifty_moves() || self.can_claim_threefold_repetition()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// A move applied to a [`Game`]; dropping it takes the move back
pub struct PlayedMove<'a> {
    game: &'a mut Game,
}

impl Deref for PlayedMove<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for PlayedMove<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for PlayedMove<'_> {
    fn drop(&mut self) {
        self.game.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut Game, moves: &[&str]) {
        for m in moves {
            game.push_uci(m).unwrap();
        }
    }

    #[test]
    fn test_push_pop_restores_position() {
        let mut game = Game::new();
        let key = game.key();
        let mv = game.push_uci("e2e4").unwrap();
        assert_ne!(game.key(), key);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.pop(), Some(mv));
        assert_eq!(game.key(), key);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.pop(), None);
    }

    #[test]
    fn test_scoped_move_is_undone_on_drop() {
        let mut game = Game::new();
        let key = game.key();
        let mv = game.legal_moves()[0].clone();
        {
            let child = game.scoped(&mv);
            assert_eq!(child.ply(), 1);
            assert_eq!(child.turn(), Color::Black);
        }
        assert_eq!(game.ply(), 0);
        assert_eq!(game.key(), key);
    }

    #[test]
    fn test_illegal_uci_move_rejected() {
        let mut game = Game::new();
        assert!(matches!(game.push_uci("e2e5"), Err(EngineError::IllegalMove(_))));
        assert!(matches!(game.push_uci("nonsense"), Err(EngineError::IllegalMove(_))));
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_threefold_claim_by_knight_shuffle() {
        let mut game = Game::new();
        play_all(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6"]);
        assert!(!game.can_claim_draw());

        // f6g8 next would be the third start position
        game.push_uci("f3g1").unwrap();
        assert_eq!(game.repetition_count(), 2);
        assert!(game.can_claim_threefold_repetition());

        game.push_uci("f6g8").unwrap();
        assert_eq!(game.repetition_count(), 3);
        assert!(game.can_claim_draw());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_fivefold_repetition_ends_game() {
        let mut game = Game::new();
        let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        for _ in 0..3 {
            play_all(&mut game, &cycle);
        }
        assert_eq!(game.repetition_count(), 4);
        assert!(!game.is_fivefold_repetition());
        assert!(!game.is_game_over());

        play_all(&mut game, &cycle);
        assert_eq!(game.repetition_count(), 5);
        assert!(game.is_fivefold_repetition());
        assert!(game.is_game_over());
        assert!(!game.is_checkmate());
    }

    #[test]
    fn test_fifty_move_claim() {
        let game = Game::from_fen("k7/8/6q1/8/8/8/8/K7 w - - 99 80").unwrap();
        assert!(!game.can_claim_threefold_repetition());
        assert!(game.can_claim_fifty_moves());

        let fresh = Game::from_fen("k7/8/6q1/8/8/8/8/K7 w - - 10 80").unwrap();
        assert!(!fresh.can_claim_fifty_moves());
    }

    #[test]
    fn test_seventyfive_moves_is_game_over() {
        let game = Game::from_fen("k7/8/6q1/8/8/8/8/K7 w - - 150 120").unwrap();
        assert!(game.is_seventyfive_moves());
        assert!(game.is_game_over());
    }

    #[test]
    fn test_game_over_states() {
        let mate = Game::from_fen("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(mate.is_checkmate());
        assert!(mate.is_game_over());

        let stalemate = Game::from_fen("7k/8/6QK/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!stalemate.is_checkmate());
        assert!(stalemate.is_game_over());

        let bare_kings = Game::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(bare_kings.is_game_over());

        assert!(!Game::new().is_game_over());
    }

    #[test]
    fn test_invalid_fen() {
        assert!(matches!(Game::from_fen("not a fen"), Err(EngineError::InvalidFen { .. })));
    }
}

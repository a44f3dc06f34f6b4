//! Error types for the solver
//!
//! Move/position mismatches are contract breaches and surface as errors the
//! caller must not recover from. Terminal positions, draws and depth
//! exhaustion are ordinary scores, never errors.

use shakmaty::Square;
use thiserror::Error;

/// Errors that can occur while evaluating or searching a position
#[derive(Error, Debug)]
pub enum EngineError {
    /// A move was scored whose origin square is empty in the given position
    #[error("a piece was expected at {square}")]
    EmptyOrigin { square: Square },

    /// A capture was scored but the mover or the victim is missing
    #[error("pieces were expected at both {from} and {to}")]
    CaptureWithoutPieces { from: Square, to: Square },

    /// A drop move reached the evaluator; standard chess never generates one
    #[error("move to {to} has no origin square")]
    DropMove { to: Square },

    /// Search was asked for a move in a position without legal moves
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move {0}")]
    IllegalMove(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for solver operations
pub type EngineResult<T> = Result<T, EngineError>;

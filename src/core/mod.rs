//! Game state and move helpers over the shakmaty rules engine
//!
//! - `Game`: position plus history, make/unmake, draw claims
//! - move helpers: castling destination, UCI text

pub mod game;
pub mod moves;

pub use game::{Game, PlayedMove};
pub use moves::{destination, to_uci};

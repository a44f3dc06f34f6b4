pub mod core;
pub mod engine;
pub mod error;
pub mod uci;

pub use crate::core::Game;
pub use engine::{evaluate_board, ordered_moves, SearchStats, Searcher};
pub use error::{EngineError, EngineResult};
pub use shakmaty;
pub use uci::UCI;

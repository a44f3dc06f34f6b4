//! UCI (Universal Chess Interface) Protocol
//!
//! Thin engine-protocol surface over the searcher.

pub mod protocol;

pub use protocol::{format_score, UCI};

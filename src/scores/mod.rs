//! In-memory score store
//!
//! Aggregates answer outcomes per game key. Everything lives in memory and
//! is lost on restart.

mod board;
mod reporter;

pub use board::{GameScore, ScoreBoard};
pub use reporter::ScoreBoardReporter;

//! Command interpretation
//!
//! Turns a normalized utterance (or a pointer event) into a game `Intent`.
//! Matching is substring containment checked in a fixed priority order:
//! - mode selection (`memory`/`remember`, `quickcount`/`count`)
//! - navigation (`back`/`home`)
//! - `start`
//! - `next`, only while the controller awaits it
//! - an answer, only while the controller awaits one
//!
//! Anything else yields no intent and is dropped silently.

mod interpreter;
mod numbers;
mod types;

pub use interpreter::{interpret, match_option, option_keywords, Snapshot};
pub use numbers::extract_number;
pub use types::{Answer, Intent, PointerEvent};

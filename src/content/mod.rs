//! Question content for both game modes
//!
//! Question sets are keyed by `(mode, level)` and played in authoring order.
//! Content ships built in, or can be loaded from a JSON file with the same shape.

mod provider;
mod question;

pub use provider::{ContentProvider, StaticContent};
pub use question::{CountQuestion, MemoryQuestion, Question, QuestionSet};

//! Terminal host for playing without a browser
//!
//! Typed lines stand in for recognized speech; lines starting with `/`
//! stand in for clicks (see `parse_line`).

mod input;
mod render;

pub use input::{parse_line, spawn_console_input, ConsoleLine, ConsoleRecognizer};
pub use render::ConsoleRenderer;

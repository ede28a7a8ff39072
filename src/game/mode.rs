use serde::{Deserialize, Serialize};
use std::fmt;

/// Which quiz the player picked. "No mode selected" is `Option::<GameMode>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Sequence-memory quiz with multiple-choice answers
    Memory,
    /// Count the repeated images and say the number
    QuickCount,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Memory, GameMode::QuickCount];

    /// Key used by the score store for this mode's outcomes
    pub fn game_key(&self) -> &'static str {
        match self {
            GameMode::Memory => "memory",
            GameMode::QuickCount => "count",
        }
    }

    /// Display title, e.g. for the "Ready to play" prompt
    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Memory => "Memory",
            GameMode::QuickCount => "Quickcount",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Memory => write!(f, "memory"),
            GameMode::QuickCount => write!(f, "quickcount"),
        }
    }
}

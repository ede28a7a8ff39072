use crate::scores::ScoreBoard;
use std::path::PathBuf;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Score table shared with the game
    pub scores: ScoreBoard,

    /// Static assets directory
    pub assets_path: PathBuf,
}

impl AppState {
    pub fn new(scores: ScoreBoard, assets_path: impl Into<PathBuf>) -> Self {
        Self {
            scores,
            assets_path: assets_path.into(),
        }
    }
}

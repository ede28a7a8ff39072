use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Result of one validated answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub session_id: Uuid,
    /// Score store key, e.g. "count"
    pub game_key: String,
    pub correct: bool,
    /// Time from the question going live to this answer
    pub response_time_ms: u64,
    pub answered_at: DateTime<Utc>,
}

/// Best-effort sink for answer outcomes. Must not block the caller.
pub trait ScoreReporter: Send + Sync {
    fn report(&self, outcome: Outcome);
}

/// Reporter that drops everything
#[derive(Debug, Default)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    fn report(&self, _outcome: Outcome) {}
}

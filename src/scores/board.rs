use crate::game::GameMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Aggregate results for one game
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    /// Number of correct answers
    pub score: u32,

    /// Number of answers, correct or not
    pub total_questions: u32,

    /// Mean response time in milliseconds over answers that reported one
    pub avg_speed: f64,

    /// Fastest correct response in milliseconds
    pub best_speed: Option<u64>,

    /// When the last answer was recorded
    pub last_played: Option<DateTime<Utc>>,

    #[serde(skip)]
    timed_answers: u32,
}

impl GameScore {
    fn record(&mut self, correct: bool, response_time_ms: Option<u64>) {
        self.total_questions += 1;
        self.last_played = Some(Utc::now());

        let response_time_ms = response_time_ms.filter(|ms| *ms > 0);

        if correct {
            self.score += 1;
            if let Some(ms) = response_time_ms {
                self.best_speed = Some(self.best_speed.map_or(ms, |best| best.min(ms)));
            }
        }

        if let Some(ms) = response_time_ms {
            self.timed_answers += 1;
            self.avg_speed += (ms as f64 - self.avg_speed) / self.timed_answers as f64;
        }
    }
}

/// Shared score table keyed by game key ("memory", "count")
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    games: Arc<RwLock<BTreeMap<String, GameScore>>>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(Self::empty_table())),
        }
    }

    fn empty_table() -> BTreeMap<String, GameScore> {
        GameMode::ALL
            .iter()
            .map(|mode| (mode.game_key().to_string(), GameScore::default()))
            .collect()
    }

    /// Record one answer. Returns the updated entry, or `None` for an unknown game.
    pub async fn record(
        &self,
        game: &str,
        correct: bool,
        response_time_ms: Option<u64>,
    ) -> Option<GameScore> {
        let mut games = self.games.write().await;
        let entry = games.get_mut(game)?;
        entry.record(correct, response_time_ms);
        Some(entry.clone())
    }

    pub async fn get(&self, game: &str) -> Option<GameScore> {
        self.games.read().await.get(game).cloned()
    }

    pub async fn snapshot(&self) -> BTreeMap<String, GameScore> {
        self.games.read().await.clone()
    }

    /// Zero every game
    pub async fn reset(&self) {
        *self.games.write().await = Self::empty_table();
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

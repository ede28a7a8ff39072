use super::board::ScoreBoard;
use crate::game::{Outcome, ScoreReporter};
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Records outcomes into a `ScoreBoard` on a background task
#[derive(Debug, Clone)]
pub struct ScoreBoardReporter {
    board: ScoreBoard,
}

impl ScoreBoardReporter {
    pub fn new(board: ScoreBoard) -> Self {
        Self { board }
    }
}

impl ScoreReporter for ScoreBoardReporter {
    fn report(&self, outcome: Outcome) {
        let Ok(handle) = Handle::try_current() else {
            warn!("No runtime available, dropping outcome for {}", outcome.game_key);
            return;
        };

        let board = self.board.clone();
        handle.spawn(async move {
            match board
                .record(
                    &outcome.game_key,
                    outcome.correct,
                    Some(outcome.response_time_ms),
                )
                .await
            {
                Some(score) => debug!(
                    "Recorded {} answer for {} ({}/{})",
                    if outcome.correct { "correct" } else { "incorrect" },
                    outcome.game_key,
                    score.score,
                    score.total_questions
                ),
                None => warn!("Score store has no game {:?}", outcome.game_key),
            }
        });
    }
}

//! Game session controller
//!
//! A single state machine owns the session state and reacts to intents from
//! voice and pointer input alike:
//!
//! Dashboard -> ModeSelected -> Intro -> ShowingContent -> AwaitingAnswer
//! -> AwaitingNext -> ... -> LevelComplete / GameComplete -> Dashboard
//!
//! Delays ("get ready", memory reveal) are explicit scheduled transitions on
//! a controller-owned timer, cancelled whenever the session is reset.

mod controller;
mod input;
mod mode;
mod outcome;
mod render;
mod runtime;
mod shuffle;
mod state;
mod timer;

pub use controller::{GameController, Scheduled, SCORE_AWARD};
pub use input::Input;
pub use mode::GameMode;
pub use outcome::{NullReporter, Outcome, ScoreReporter};
pub use render::{Control, FeedbackTone, Notice, RenderCommand, Renderer};
pub use runtime::run;
pub use shuffle::{shuffle_options, ShuffledOptions};
pub use state::{Phase, SessionState, VoiceState};
pub use timer::OneShotTimer;

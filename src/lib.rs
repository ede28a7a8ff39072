pub mod config;
pub mod console;
pub mod content;
pub mod game;
pub mod http;
pub mod intent;
pub mod recognizer;
pub mod scores;
pub mod speech;

pub use config::Config;
pub use content::{ContentProvider, CountQuestion, MemoryQuestion, Question, QuestionSet, StaticContent};
pub use game::{GameController, GameMode, Input, Phase, RenderCommand, Renderer, SessionState};
pub use http::{create_router, AppState};
pub use intent::{interpret, Answer, Intent, PointerEvent};
pub use recognizer::{RecognitionEngine, RecognizerAdapter, RecognizerHandle};
pub use scores::{ScoreBoard, ScoreBoardReporter};
pub use speech::{SpeechEmitter, SpeechSynthesizer};

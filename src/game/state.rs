use super::mode::GameMode;
use serde::Serialize;
use tokio::time::Instant;
use uuid::Uuid;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Mode selection screen
    #[default]
    Dashboard,
    /// Mode picked, waiting for "start"
    ModeSelected,
    /// "Get ready" beat before the first question
    Intro,
    /// Content on screen but no answer accepted yet (memory sequence)
    ShowingContent,
    AwaitingAnswer,
    AwaitingNext,
    /// Quick-count question set finished
    LevelComplete,
    /// Memory question set finished
    GameComplete,
}

impl Phase {
    /// Whether the phase ends a question set
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::LevelComplete | Phase::GameComplete)
    }
}

/// Mutable state of one play session. Owned and mutated by the controller only.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub session_id: Uuid,
    pub mode: Option<GameMode>,
    pub phase: Phase,
    pub question_index: usize,
    pub score: u32,
    pub correct_count: u32,
    pub level: u32,
    pub awaiting_answer: bool,
    pub awaiting_next: bool,
    /// Valid only while multiple-choice options are displayed
    pub current_correct_option: Option<usize>,
    /// Option labels in displayed (shuffled) order
    pub displayed_options: Vec<String>,
    /// When the current question started accepting answers
    pub question_shown_at: Option<Instant>,
}

impl SessionState {
    pub fn new(level: u32) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            mode: None,
            phase: Phase::Dashboard,
            question_index: 0,
            score: 0,
            correct_count: 0,
            level: level.max(1),
            awaiting_answer: false,
            awaiting_next: false,
            current_correct_option: None,
            displayed_options: Vec::new(),
            question_shown_at: None,
        }
    }

    /// Fresh session for `mode`, keeping nothing from the previous one
    pub fn for_mode(mode: GameMode, level: u32) -> Self {
        Self {
            mode: Some(mode),
            phase: Phase::ModeSelected,
            ..Self::new(level)
        }
    }

    /// Drop anything tied to the question on screen
    pub fn clear_question(&mut self) {
        self.awaiting_answer = false;
        self.awaiting_next = false;
        self.current_correct_option = None;
        self.displayed_options.clear();
        self.question_shown_at = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Voice input/output switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceState {
    /// User toggle
    pub enabled: bool,
    /// Microphone permission was refused
    pub permission_denied: bool,
    /// The host has a usable recognizer
    pub supported: bool,
}

impl VoiceState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            permission_denied: false,
            supported: true,
        }
    }

    /// Derived: whether voice commands can currently arrive
    pub fn recognition_active(&self) -> bool {
        self.enabled && self.supported && !self.permission_denied
    }
}

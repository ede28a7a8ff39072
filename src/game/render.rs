/// Buttons the controller shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Persistent until dismissed; the game stays playable by pointer
    MicrophoneDenied,
    /// Shown once when the host has no usable recognizer
    RecognitionUnsupported,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MicrophoneDenied => {
                "🎤 Microphone access required. Allow microphone access to play by voice."
            }
            Notice::RecognitionUnsupported => {
                "🌐 Voice commands are not available here. You can still play by clicking."
            }
        }
    }
}

/// A request to change what the player sees
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ShowDashboard,
    ShowGameArea,
    Prompt(String),
    /// Multiple-choice buttons, in displayed order
    Options(Vec<String>),
    /// Memory sequence shown before the question
    Sequence(Vec<String>),
    CountingImages {
        object: String,
        image: String,
        count: u32,
    },
    ClearStage,
    SetControl {
        control: Control,
        visible: bool,
    },
    StartLabel(String),
    Feedback {
        text: String,
        tone: FeedbackTone,
    },
    ClearFeedback,
    Score {
        score: u32,
        level: u32,
    },
    ShowNotice(Notice),
    DismissNotice,
    VoiceIndicator(bool),
}

/// Consumes render commands. Implementations must not block.
pub trait Renderer: Send {
    fn render(&mut self, command: RenderCommand);
}

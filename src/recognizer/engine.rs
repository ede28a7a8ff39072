use anyhow::Result;
use std::fmt;

/// Error codes reported by a recognition engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorKind {
    /// Microphone permission denied
    NotAllowed,
    /// Recognition was aborted (usually by our own stop)
    Aborted,
    /// Nothing was said before the engine gave up
    NoSpeech,
    Network,
    AudioCapture,
    Other(String),
}

impl RecognitionErrorKind {
    /// Parse an engine error code such as `"not-allowed"`
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "not-allowed" | "service-not-allowed" => Self::NotAllowed,
            "aborted" => Self::Aborted,
            "no-speech" => Self::NoSpeech,
            "network" => Self::Network,
            "audio-capture" => Self::AudioCapture,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RecognitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllowed => write!(f, "not-allowed"),
            Self::Aborted => write!(f, "aborted"),
            Self::NoSpeech => write!(f, "no-speech"),
            Self::Network => write!(f, "network"),
            Self::AudioCapture => write!(f, "audio-capture"),
            Self::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Raw events pushed by an engine into its event channel
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    /// A recognition result; interim results have `is_final == false`
    Result { transcript: String, is_final: bool },
    /// The engine hit an error; it may or may not also end
    Error(RecognitionErrorKind),
    /// The engine stopped listening on its own
    End,
}

/// Speech recognition backend
///
/// Engines deliver `RecognitionEvent`s on a channel handed to them at
/// construction; this trait only controls listening.
#[async_trait::async_trait]
pub trait RecognitionEngine: Send {
    /// Begin continuous listening. Fails if already listening.
    async fn start(&mut self) -> Result<()>;

    /// Stop listening
    async fn stop(&mut self) -> Result<()>;

    /// Check if the engine is currently listening
    fn is_listening(&self) -> bool;

    /// Get engine name for logging
    fn name(&self) -> &str;
}

/// Lowercase and trim a transcript
pub fn normalize(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}

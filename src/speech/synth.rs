use crate::config::SpeechConfig;
use anyhow::Result;
use tracing::info;

/// Fixed voice parameters for every utterance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechParams {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 0.8,
            pitch: 1.1,
            volume: 1.0,
        }
    }
}

impl From<&SpeechConfig> for SpeechParams {
    fn from(cfg: &SpeechConfig) -> Self {
        Self {
            rate: cfg.rate,
            pitch: cfg.pitch,
            volume: cfg.volume,
        }
    }
}

/// Text-to-speech backend
pub trait SpeechSynthesizer: Send {
    /// Drop any queued or playing utterance
    fn cancel(&mut self);

    /// Queue `text` for playback. Must not wait for playback to finish.
    fn speak(&mut self, text: &str, params: &SpeechParams) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Synthesizer for the terminal host: "speaks" into the log
#[derive(Debug, Default)]
pub struct LogSynthesizer;

impl SpeechSynthesizer for LogSynthesizer {
    fn cancel(&mut self) {}

    fn speak(&mut self, text: &str, params: &SpeechParams) -> Result<()> {
        info!(rate = params.rate, pitch = params.pitch, "Speaking: {}", text);
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

use super::synth::{SpeechParams, SpeechSynthesizer};
use tracing::{debug, warn};

/// Owns the synthesizer and the voice-enabled switch
pub struct SpeechEmitter {
    synth: Box<dyn SpeechSynthesizer>,
    params: SpeechParams,
    enabled: bool,
}

impl SpeechEmitter {
    pub fn new(synth: Box<dyn SpeechSynthesizer>, params: SpeechParams) -> Self {
        Self {
            synth,
            params,
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Speak `text`, replacing any utterance still in flight.
    ///
    /// No-op while voice is disabled. Fire-and-forget: synthesizer errors
    /// are logged, never returned.
    pub fn speak(&mut self, text: &str) {
        if !self.enabled {
            debug!("Voice disabled, not speaking: {}", text);
            return;
        }

        self.synth.cancel();
        if let Err(e) = self.synth.speak(text, &self.params) {
            warn!("Speech via {} failed: {}", self.synth.name(), e);
        }
    }

    /// Turning voice off discards pending speech immediately
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.synth.cancel();
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn params(&self) -> &SpeechParams {
        &self.params
    }
}

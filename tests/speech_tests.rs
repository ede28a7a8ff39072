mod common;

use anyhow::{bail, Result};
use common::RecordingSynth;
use voice_quiz::config::SpeechConfig;
use voice_quiz::speech::{SpeechEmitter, SpeechParams, SpeechSynthesizer};

#[test]
fn test_each_utterance_cancels_the_previous() {
    let synth = RecordingSynth::default();
    let mut emitter = SpeechEmitter::new(Box::new(synth.clone()), SpeechParams::default());

    emitter.speak("Game started!");
    emitter.speak("How many apples do you see?");

    assert_eq!(synth.spoken(), vec!["Game started!", "How many apples do you see?"]);
    assert_eq!(synth.cancels(), 2);
}

#[test]
fn test_disabled_voice_is_silent() {
    let synth = RecordingSynth::default();
    let mut emitter =
        SpeechEmitter::new(Box::new(synth.clone()), SpeechParams::default()).with_enabled(false);

    emitter.speak("Correct!");
    assert!(synth.spoken().is_empty());
    assert!(!emitter.is_enabled());
}

#[test]
fn test_disabling_cancels_pending_speech() {
    let synth = RecordingSynth::default();
    let mut emitter = SpeechEmitter::new(Box::new(synth.clone()), SpeechParams::default());

    emitter.set_enabled(false);
    assert_eq!(synth.cancels(), 1);

    emitter.set_enabled(true);
    emitter.speak("Great job!");
    assert_eq!(synth.last().as_deref(), Some("Great job!"));
}

struct BrokenSynth;

impl SpeechSynthesizer for BrokenSynth {
    fn cancel(&mut self) {}

    fn speak(&mut self, _text: &str, _params: &SpeechParams) -> Result<()> {
        bail!("no audio device")
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[test]
fn test_synth_errors_are_swallowed() {
    let mut emitter = SpeechEmitter::new(Box::new(BrokenSynth), SpeechParams::default());
    emitter.speak("Wrong answer. Try again.");
    assert!(emitter.is_enabled());
}

#[test]
fn test_params_from_config() {
    let cfg = SpeechConfig {
        enabled: true,
        rate: 1.0,
        pitch: 0.9,
        volume: 0.5,
    };
    let emitter = SpeechEmitter::new(Box::new(BrokenSynth), SpeechParams::from(&cfg));

    assert_eq!(emitter.params().pitch, 0.9);
    assert_eq!(emitter.params().volume, 0.5);
    assert_eq!(SpeechParams::default().rate, 0.8);
}

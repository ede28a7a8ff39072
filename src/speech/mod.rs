//! Spoken feedback
//!
//! At most one utterance is active: every `speak` cancels whatever is
//! queued or playing before handing the new text to the synthesizer.

mod emitter;
mod synth;

pub use emitter::SpeechEmitter;
pub use synth::{LogSynthesizer, SpeechParams, SpeechSynthesizer};

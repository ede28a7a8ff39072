//! Continuous speech recognition
//!
//! The adapter wraps a `RecognitionEngine` and turns its raw events into
//! finalized, normalized utterances. It owns the resilience policy:
//! - interim results are discarded
//! - `not-allowed` raises a permission signal and stops restarting
//! - `aborted` / `no-speech` are ignored
//! - any other error, and every natural end, restarts after a short delay
//! - a failed start is retried after a fixed backoff
//!
//! It knows nothing about the game.

mod adapter;
mod engine;

pub use adapter::{
    control_channel, AdapterAction, AdapterSignal, ListenerControl, RecognizerAdapter,
    RecognizerControl, RecognizerHandle,
};
pub use engine::{normalize, RecognitionEngine, RecognitionErrorKind, RecognitionEvent};

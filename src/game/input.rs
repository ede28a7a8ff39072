use crate::intent::PointerEvent;
use crate::recognizer::AdapterSignal;

/// Everything the controller reacts to, funneled through one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Finalized, normalized speech
    Utterance(String),
    Pointer(PointerEvent),
    PermissionDenied,
    RecognitionUnsupported,
}

impl From<AdapterSignal> for Input {
    fn from(signal: AdapterSignal) -> Self {
        match signal {
            AdapterSignal::Utterance(text) => Input::Utterance(text),
            AdapterSignal::PermissionDenied => Input::PermissionDenied,
        }
    }
}

impl From<PointerEvent> for Input {
    fn from(event: PointerEvent) -> Self {
        Input::Pointer(event)
    }
}

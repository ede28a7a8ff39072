use super::engine::{normalize, RecognitionEngine, RecognitionErrorKind, RecognitionEvent};
use crate::config::PacingConfig;
use anyhow::Result;
use futures::future::OptionFuture;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, warn};

/// What the adapter hands to the rest of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterSignal {
    /// A finalized, normalized utterance
    Utterance(String),
    /// Microphone permission was denied; voice input is off until restarted
    PermissionDenied,
}

/// Outcome of the event policy for a single engine event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterAction {
    Emit(String),
    Restart(Duration),
    PermissionDenied,
    Ignore,
}

/// Control messages from the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerControl {
    Start,
    Stop,
}

/// Something that can switch listening on and off
pub trait ListenerControl: Send {
    fn start_listening(&self);
    fn stop_listening(&self);
}

/// Cloneable handle used to start and stop a running adapter
#[derive(Debug, Clone)]
pub struct RecognizerHandle {
    tx: mpsc::UnboundedSender<RecognizerControl>,
}

impl RecognizerHandle {
    pub fn start(&self) {
        if self.tx.send(RecognizerControl::Start).is_err() {
            debug!("Recognizer adapter gone, start ignored");
        }
    }

    /// Idempotent; suppresses auto-restart until the next `start`
    pub fn stop(&self) {
        if self.tx.send(RecognizerControl::Stop).is_err() {
            debug!("Recognizer adapter gone, stop ignored");
        }
    }
}

impl ListenerControl for RecognizerHandle {
    fn start_listening(&self) {
        self.start();
    }

    fn stop_listening(&self) {
        self.stop();
    }
}

/// Create the control channel between a `RecognizerHandle` and `RecognizerAdapter::run`
pub fn control_channel() -> (RecognizerHandle, mpsc::UnboundedReceiver<RecognizerControl>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RecognizerHandle { tx }, rx)
}

/// Wraps an engine with the always-listening restart policy
pub struct RecognizerAdapter<E: RecognitionEngine> {
    engine: E,
    /// Listening requested by the application
    wanted: bool,
    permission_denied: bool,
    restart_delay: Duration,
    start_retry: Duration,
}

impl<E: RecognitionEngine> RecognizerAdapter<E> {
    pub fn new(engine: E, pacing: &PacingConfig) -> Self {
        Self {
            engine,
            wanted: true,
            permission_denied: false,
            restart_delay: pacing.restart_delay(),
            start_retry: pacing.start_retry(),
        }
    }

    /// Whether the adapter starts listening as soon as it runs
    pub fn with_listening(mut self, wanted: bool) -> Self {
        self.wanted = wanted;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_wanted(&self) -> bool {
        self.wanted
    }

    /// Decide what to do with one engine event
    pub fn on_event(&self, event: RecognitionEvent) -> AdapterAction {
        match event {
            RecognitionEvent::Result { is_final: false, .. } => AdapterAction::Ignore,
            RecognitionEvent::Result { transcript, is_final: true } => {
                let text = normalize(&transcript);
                if text.is_empty() || !self.wanted {
                    AdapterAction::Ignore
                } else {
                    AdapterAction::Emit(text)
                }
            }
            RecognitionEvent::Error(RecognitionErrorKind::NotAllowed) => {
                AdapterAction::PermissionDenied
            }
            RecognitionEvent::Error(RecognitionErrorKind::Aborted)
            | RecognitionEvent::Error(RecognitionErrorKind::NoSpeech) => AdapterAction::Ignore,
            RecognitionEvent::Error(_) | RecognitionEvent::End => {
                if self.wanted && !self.permission_denied {
                    AdapterAction::Restart(self.restart_delay)
                } else {
                    AdapterAction::Ignore
                }
            }
        }
    }

    /// Drive the engine until its event channel closes or `out` is dropped.
    ///
    /// Engine events are processed in delivery order. Restart and retry
    /// delays are a single pending deadline; a newer one replaces the older.
    pub async fn run<O>(
        mut self,
        mut events: mpsc::Receiver<RecognitionEvent>,
        mut control: mpsc::UnboundedReceiver<RecognizerControl>,
        out: mpsc::Sender<O>,
    ) -> Result<()>
    where
        O: From<AdapterSignal> + Send,
    {
        info!("Recognizer adapter started ({})", self.engine.name());

        let mut restart_at: Option<Instant> = None;
        let mut control_open = true;

        if self.wanted {
            restart_at = self.try_start().await;
        }

        loop {
            let timer: OptionFuture<_> = restart_at.map(sleep_until).into();

            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        info!("Recognition engine closed its event stream");
                        break;
                    };

                    match self.on_event(event.clone()) {
                        AdapterAction::Emit(text) => {
                            debug!("Heard: {}", text);
                            if out.send(AdapterSignal::Utterance(text).into()).await.is_err() {
                                break;
                            }
                        }
                        AdapterAction::Restart(delay) => {
                            if let RecognitionEvent::Error(kind) = &event {
                                warn!("Speech error: {}, restarting", kind);
                            } else {
                                debug!("Recognition ended, restarting");
                            }
                            restart_at = Some(Instant::now() + delay);
                        }
                        AdapterAction::PermissionDenied => {
                            error!("Microphone access denied");
                            self.permission_denied = true;
                            restart_at = None;
                            if out.send(AdapterSignal::PermissionDenied.into()).await.is_err() {
                                break;
                            }
                        }
                        AdapterAction::Ignore => {
                            debug!("Ignoring recognition event: {:?}", event);
                        }
                    }
                }
                msg = control.recv(), if control_open => match msg {
                    Some(RecognizerControl::Start) => {
                        self.wanted = true;
                        self.permission_denied = false;
                        restart_at = self.try_start().await;
                    }
                    Some(RecognizerControl::Stop) => {
                        self.wanted = false;
                        restart_at = None;
                        if self.engine.is_listening() {
                            if let Err(e) = self.engine.stop().await {
                                warn!("Failed to stop {}: {}", self.engine.name(), e);
                            }
                        }
                        info!("Recognition stopped");
                    }
                    None => control_open = false,
                },
                Some(()) = timer => {
                    restart_at = None;
                    if self.wanted && !self.permission_denied {
                        restart_at = self.try_start().await;
                    }
                }
            }
        }

        if self.engine.is_listening() {
            if let Err(e) = self.engine.stop().await {
                warn!("Failed to stop {}: {}", self.engine.name(), e);
            }
        }

        info!("Recognizer adapter stopped");
        Ok(())
    }

    /// Start the engine; on failure return the retry deadline
    async fn try_start(&mut self) -> Option<Instant> {
        match self.engine.start().await {
            Ok(()) => {
                info!("Voice recognition active ({})", self.engine.name());
                None
            }
            Err(e) => {
                warn!("Recognition start error: {}", e);
                Some(Instant::now() + self.start_retry)
            }
        }
    }
}

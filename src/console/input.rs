use crate::game::{GameMode, Input};
use crate::intent::PointerEvent;
use crate::recognizer::{RecognitionEngine, RecognitionErrorKind, RecognitionEvent};
use anyhow::{bail, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Recognition engine fed by typed lines.
///
/// Like browser engines, `start` fails while already listening.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRecognizer {
    listening: Arc<AtomicBool>,
}

impl ConsoleRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag shared with the stdin reader
    pub fn listening_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.listening)
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for ConsoleRecognizer {
    async fn start(&mut self) -> Result<()> {
        if self.listening.swap(true, Ordering::SeqCst) {
            bail!("recognition has already started");
        }
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        self.listening.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Speech(String),
    Pointer(PointerEvent),
    /// Simulated engine error, e.g. `/error network`
    EngineError(RecognitionErrorKind),
    /// Simulated natural end of recognition
    EngineEnd,
    Empty,
    Unknown(String),
}

/// Parse a console line.
///
/// Commands: `/memory`, `/quickcount`, `/start`, `/next`, `/back`,
/// `/pick N` (1-based), `/voice`, `/dismiss`, `/error CODE`, `/end`.
/// Anything not starting with `/` is speech.
pub fn parse_line(line: &str) -> ConsoleLine {
    let line = line.trim();
    if line.is_empty() {
        return ConsoleLine::Empty;
    }

    let Some(command) = line.strip_prefix('/') else {
        return ConsoleLine::Speech(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    let pointer = match (name.as_str(), arg) {
        ("memory", _) => PointerEvent::SelectGame(GameMode::Memory),
        ("quickcount", _) => PointerEvent::SelectGame(GameMode::QuickCount),
        ("start", _) => PointerEvent::Start,
        ("next", _) => PointerEvent::Next,
        ("back", _) => PointerEvent::Back,
        ("voice", _) => PointerEvent::ToggleVoice,
        ("dismiss", _) => PointerEvent::DismissNotice,
        ("pick", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => PointerEvent::OptionClicked(n - 1),
            _ => return ConsoleLine::Unknown(line.to_string()),
        },
        ("error", Some(code)) => {
            return ConsoleLine::EngineError(RecognitionErrorKind::from_code(code))
        }
        ("end", _) => return ConsoleLine::EngineEnd,
        _ => return ConsoleLine::Unknown(line.to_string()),
    };

    ConsoleLine::Pointer(pointer)
}

/// Read stdin until EOF, routing speech to the recognizer and clicks to the game.
///
/// Speech typed while the recognizer is not listening is dropped. Both
/// senders are dropped at EOF, which winds down the adapter and game loop.
pub fn spawn_console_input(
    listening: Arc<AtomicBool>,
    speech_tx: mpsc::Sender<RecognitionEvent>,
    game_tx: mpsc::Sender<Input>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        info!("Console input ready (type speech, or /help for commands)");

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read console input: {}", e);
                    break;
                }
            };

            let speech_event = match parse_line(&line) {
                ConsoleLine::Speech(text) => {
                    if !listening.load(Ordering::SeqCst) {
                        debug!("Not listening, dropped: {}", text);
                        continue;
                    }
                    RecognitionEvent::Result {
                        transcript: text,
                        is_final: true,
                    }
                }
                ConsoleLine::EngineError(kind) => {
                    listening.store(false, Ordering::SeqCst);
                    RecognitionEvent::Error(kind)
                }
                ConsoleLine::EngineEnd => {
                    listening.store(false, Ordering::SeqCst);
                    RecognitionEvent::End
                }
                ConsoleLine::Pointer(event) => {
                    if game_tx.send(Input::Pointer(event)).await.is_err() {
                        break;
                    }
                    continue;
                }
                ConsoleLine::Empty => continue,
                ConsoleLine::Unknown(text) => {
                    println!(
                        "Commands: /memory /quickcount /start /next /back /pick N /voice /dismiss /error CODE /end ({} not understood)",
                        text
                    );
                    continue;
                }
            };

            if speech_tx.send(speech_event).await.is_err() {
                debug!("Voice input unavailable, line dropped");
            }
        }

        info!("Console input closed");
    })
}

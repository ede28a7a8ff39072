// Shared test doubles for the controller's collaborators
#![allow(dead_code)]

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use voice_quiz::config::PacingConfig;
use voice_quiz::content::{CountQuestion, StaticContent};
use voice_quiz::game::{GameController, Outcome, RenderCommand, Renderer, ScoreReporter};
use voice_quiz::recognizer::ListenerControl;
use voice_quiz::speech::{SpeechEmitter, SpeechParams, SpeechSynthesizer};

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl RecordingRenderer {
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }

    /// Text of every feedback command, in order
    pub fn feedback(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                RenderCommand::Feedback { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Options from the last `Options` command
    pub fn last_options(&self) -> Option<Vec<String>> {
        self.commands().into_iter().rev().find_map(|c| match c {
            RenderCommand::Options(options) => Some(options),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, command: RenderCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

#[derive(Clone, Default)]
pub struct RecordingSynth {
    pub spoken: Arc<Mutex<Vec<String>>>,
    pub cancels: Arc<AtomicUsize>,
}

impl RecordingSynth {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.spoken().last().cloned()
    }

    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl SpeechSynthesizer for RecordingSynth {
    fn cancel(&mut self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }

    fn speak(&mut self, text: &str, _params: &SpeechParams) -> Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[derive(Clone, Default)]
pub struct RecordingListener {
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingListener {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl ListenerControl for RecordingListener {
    fn start_listening(&self) {
        self.calls.lock().unwrap().push("start");
    }

    fn stop_listening(&self) {
        self.calls.lock().unwrap().push("stop");
    }
}

#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub outcomes: Arc<Mutex<Vec<Outcome>>>,
}

impl RecordingReporter {
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl ScoreReporter for RecordingReporter {
    fn report(&self, outcome: Outcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }
}

pub struct Harness {
    pub controller: GameController,
    pub renderer: RecordingRenderer,
    pub synth: RecordingSynth,
    pub listener: RecordingListener,
    pub reporter: RecordingReporter,
}

pub fn harness(content: StaticContent) -> Harness {
    harness_seeded(content, 42)
}

pub fn harness_seeded(content: StaticContent, seed: u64) -> Harness {
    let renderer = RecordingRenderer::default();
    let synth = RecordingSynth::default();
    let listener = RecordingListener::default();
    let reporter = RecordingReporter::default();

    let controller = GameController::new(
        PacingConfig::default(),
        Arc::new(content),
        Box::new(renderer.clone()),
        SpeechEmitter::new(Box::new(synth.clone()), SpeechParams::default()),
        Box::new(listener.clone()),
        Arc::new(reporter.clone()),
    )
    .with_rng(StdRng::seed_from_u64(seed));

    Harness {
        controller,
        renderer,
        synth,
        listener,
        reporter,
    }
}

/// Level-1 quick-count content from `(object, count)` pairs
pub fn count_content(questions: &[(&str, u32)]) -> StaticContent {
    let level: Vec<CountQuestion> = questions
        .iter()
        .map(|(object, count)| CountQuestion {
            object: object.to_string(),
            count: *count,
            image: format!("assets/{}.svg", object),
        })
        .collect();

    StaticContent::new(BTreeMap::new(), BTreeMap::from([(1, level)]))
}

/// Select a mode, say "start", and let the intro delay elapse
pub fn start_mode(h: &mut Harness, mode_word: &str) {
    h.controller.handle_utterance(mode_word);
    h.controller.handle_utterance("start game");
    assert!(h.controller.fire_pending(), "intro transition should be pending");
}

/// Start memory mode and reveal the first question
pub fn start_memory(h: &mut Harness) {
    start_mode(h, "memory");
    assert!(h.controller.fire_pending(), "reveal transition should be pending");
}

use super::input::Input;
use super::mode::GameMode;
use super::outcome::{Outcome, ScoreReporter};
use super::render::{Control, FeedbackTone, Notice, RenderCommand, Renderer};
use super::shuffle::shuffle_options;
use super::state::{Phase, SessionState, VoiceState};
use super::timer::OneShotTimer;
use crate::config::PacingConfig;
use crate::content::{ContentProvider, CountQuestion, MemoryQuestion, Question, QuestionSet};
use crate::intent::{interpret, Answer, Intent, PointerEvent, Snapshot};
use crate::recognizer::ListenerControl;
use crate::speech::SpeechEmitter;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Points for each correct answer
pub const SCORE_AWARD: u32 = 10;

/// Transitions that happen after a fixed delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
    /// End of the intro beat: show the first question
    BeginQuestions,
    /// End of the memory sequence: ask the question
    RevealQuestion,
}

/// The game session state machine.
///
/// Every input (speech, pointer, recognizer signals) enters through
/// `handle_input`; delayed transitions are fired by the owner through
/// `fire_due` once `next_deadline` passes.
pub struct GameController {
    state: SessionState,
    voice: VoiceState,
    questions: QuestionSet,
    start_level: u32,
    pacing: PacingConfig,
    timer: OneShotTimer<Scheduled>,
    content: Arc<dyn ContentProvider>,
    renderer: Box<dyn Renderer>,
    speech: SpeechEmitter,
    listener: Box<dyn ListenerControl>,
    reporter: Arc<dyn ScoreReporter>,
    rng: StdRng,
    unsupported_notified: bool,
}

impl GameController {
    pub fn new(
        pacing: PacingConfig,
        content: Arc<dyn ContentProvider>,
        renderer: Box<dyn Renderer>,
        speech: SpeechEmitter,
        listener: Box<dyn ListenerControl>,
        reporter: Arc<dyn ScoreReporter>,
    ) -> Self {
        let voice = VoiceState::new(speech.is_enabled());

        Self {
            state: SessionState::new(1),
            voice,
            questions: Vec::new(),
            start_level: 1,
            pacing,
            timer: OneShotTimer::new(),
            content,
            renderer,
            speech,
            listener,
            reporter,
            rng: StdRng::from_os_rng(),
            unsupported_notified: false,
        }
    }

    pub fn with_start_level(mut self, level: u32) -> Self {
        self.start_level = level.max(1);
        self.state.level = self.start_level;
        self
    }

    /// Replace the shuffle RNG (seeded RNGs make option order reproducible)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn voice(&self) -> &VoiceState {
        &self.voice
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// When the pending delayed transition is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    pub fn pending_transition(&self) -> Option<Scheduled> {
        self.timer.payload().copied()
    }

    /// Show the dashboard and, if voice commands work, say how to pick a game
    pub fn welcome(&mut self) {
        self.renderer.render(RenderCommand::ShowDashboard);
        self.renderer.render(RenderCommand::VoiceIndicator(self.voice.enabled));
        if self.voice.recognition_active() {
            self.speech.speak("Say memory or quickcount to choose a game.");
        }
    }

    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Utterance(text) => self.handle_utterance(&text),
            Input::Pointer(event) => self.handle_pointer(event),
            Input::PermissionDenied => self.permission_denied(),
            Input::RecognitionUnsupported => self.recognition_unsupported(),
        }
    }

    /// Classify an utterance against the current state and act on it
    pub fn handle_utterance(&mut self, text: &str) {
        let snapshot = Snapshot {
            mode: self.state.mode,
            awaiting_answer: self.state.awaiting_answer,
            awaiting_next: self.state.awaiting_next,
            options: &self.state.displayed_options,
        };

        match interpret(text, &snapshot) {
            Some(intent) => {
                debug!("Utterance {:?} -> {:?}", text, intent);
                self.handle(intent);
            }
            None => debug!("No intent in utterance {:?}", text),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::ToggleVoice => self.toggle_voice(),
            PointerEvent::DismissNotice => self.renderer.render(RenderCommand::DismissNotice),
            other => {
                if let Some(intent) = other.intent() {
                    self.handle(intent);
                }
            }
        }
    }

    /// Single dispatch point for intents from any source
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::SelectMode(mode) => self.select_mode(mode),
            Intent::ReturnToDashboard => self.return_to_dashboard(),
            Intent::StartGame => self.start_game(),
            Intent::NextQuestion => self.next_question(),
            Intent::AnswerGiven(answer) => self.answer(answer),
        }
    }

    /// Fire the pending transition if its deadline is at or before `now`
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.timer.take_due(now) {
            Some(scheduled) => {
                self.run_scheduled(scheduled);
                true
            }
            None => false,
        }
    }

    /// Fire the pending transition immediately, whatever its deadline
    pub fn fire_pending(&mut self) -> bool {
        match self.timer.take() {
            Some(scheduled) => {
                self.run_scheduled(scheduled);
                true
            }
            None => false,
        }
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        if self.voice.enabled == enabled {
            return;
        }

        self.voice.enabled = enabled;
        self.speech.set_enabled(enabled);
        self.renderer.render(RenderCommand::VoiceIndicator(enabled));

        if enabled {
            info!("Voice enabled");
            self.voice.permission_denied = false;
            self.listener.start_listening();
            self.speech.speak("Voice enabled");
        } else {
            info!("Voice disabled");
            self.listener.stop_listening();
        }
    }

    fn toggle_voice(&mut self) {
        self.set_voice_enabled(!self.voice.enabled);
    }

    fn permission_denied(&mut self) {
        warn!("Voice input unavailable: microphone permission denied");
        self.voice.permission_denied = true;
        self.renderer
            .render(RenderCommand::ShowNotice(Notice::MicrophoneDenied));
    }

    fn recognition_unsupported(&mut self) {
        self.voice.supported = false;
        if self.unsupported_notified {
            return;
        }
        warn!("Speech recognition is not supported by this host");
        self.unsupported_notified = true;
        self.renderer
            .render(RenderCommand::ShowNotice(Notice::RecognitionUnsupported));
    }

    fn select_mode(&mut self, mode: GameMode) {
        info!("Selected game: {}", mode);

        self.timer.cancel();
        self.state = SessionState::for_mode(mode, self.start_level);
        self.questions = self.content.question_set(mode, self.state.level);

        self.renderer.render(RenderCommand::ShowGameArea);
        self.reset_stage();
        self.renderer.render(RenderCommand::Prompt(format!(
            "Ready to play {}!",
            mode.title()
        )));
        self.speech.speak("Say start game to begin.");
    }

    fn start_game(&mut self) {
        let Some(mode) = self.state.mode else {
            debug!("Start ignored: no game selected");
            return;
        };

        info!("Starting {} at level {}", mode, self.start_level);

        self.timer.cancel();
        self.state = SessionState {
            phase: Phase::Intro,
            ..SessionState::for_mode(mode, self.start_level)
        };
        self.questions = self.content.question_set(mode, self.state.level);

        self.reset_stage();
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Start,
            visible: false,
        });
        self.speech.speak("Game started!");
        self.timer
            .schedule(self.pacing.intro_delay(), Scheduled::BeginQuestions);
    }

    fn return_to_dashboard(&mut self) {
        info!("Returning to dashboard");

        self.timer.cancel();
        self.state = SessionState::new(self.start_level);
        self.questions.clear();

        self.renderer.render(RenderCommand::ShowDashboard);
        self.speech.speak("Choose a game. Say memory or quickcount.");
    }

    fn next_question(&mut self) {
        if !self.state.awaiting_next {
            debug!("Next ignored in phase {:?}", self.state.phase);
            return;
        }

        self.state.awaiting_next = false;
        self.state.question_index += 1;
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Next,
            visible: false,
        });
        self.show_content();
    }

    fn run_scheduled(&mut self, scheduled: Scheduled) {
        match scheduled {
            Scheduled::BeginQuestions if self.state.phase == Phase::Intro => self.show_content(),
            Scheduled::RevealQuestion if self.state.phase == Phase::ShowingContent => {
                self.reveal_memory_question()
            }
            stale => debug!("Dropping stale transition {:?} in {:?}", stale, self.state.phase),
        }
    }

    fn show_content(&mut self) {
        self.state.clear_question();

        let Some(question) = self.questions.get(self.state.question_index).cloned() else {
            self.complete_level();
            return;
        };

        match question {
            Question::QuickCount(q) => self.show_count_question(&q),
            Question::Memory(q) => self.show_memory_sequence(&q),
        }
    }

    fn show_count_question(&mut self, question: &CountQuestion) {
        let prompt = question.prompt();

        self.renderer.render(RenderCommand::ClearFeedback);
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Next,
            visible: false,
        });
        self.renderer.render(RenderCommand::Prompt(prompt.clone()));
        self.renderer.render(RenderCommand::CountingImages {
            object: question.object.clone(),
            image: question.image.clone(),
            count: question.count,
        });
        self.speech.speak(&prompt);

        self.await_answer();
    }

    fn show_memory_sequence(&mut self, question: &MemoryQuestion) {
        self.state.phase = Phase::ShowingContent;

        self.renderer.render(RenderCommand::ClearFeedback);
        self.renderer
            .render(RenderCommand::Prompt("Remember this sequence:".to_string()));
        self.renderer
            .render(RenderCommand::Sequence(question.sequence.clone()));
        self.speech.speak("Remember this sequence carefully.");

        self.timer
            .schedule(self.pacing.memory_reveal(), Scheduled::RevealQuestion);
    }

    fn reveal_memory_question(&mut self) {
        let Some(Question::Memory(question)) = self.questions.get(self.state.question_index).cloned()
        else {
            warn!(
                "No memory question at index {}, ending game",
                self.state.question_index
            );
            self.complete_level();
            return;
        };

        let shuffled = shuffle_options(&question.options, question.correct, &mut self.rng);
        if shuffled.correct_index.is_none() {
            warn!(
                "Question {:?} has no option at index {}",
                question.question, question.correct
            );
        }
        self.state.current_correct_option = shuffled.correct_index;
        self.state.displayed_options = shuffled.options;

        self.renderer
            .render(RenderCommand::Prompt(question.question.clone()));
        self.renderer
            .render(RenderCommand::Options(self.state.displayed_options.clone()));
        self.speech
            .speak(&format!("{} Say your answer.", question.question));

        self.await_answer();
    }

    fn await_answer(&mut self) {
        self.state.awaiting_answer = true;
        self.state.awaiting_next = false;
        self.state.phase = Phase::AwaitingAnswer;
        self.state.question_shown_at = Some(Instant::now());
    }

    fn answer(&mut self, answer: Answer) {
        if !self.state.awaiting_answer {
            warn!("Answer {:?} ignored: not awaiting an answer", answer);
            return;
        }

        let Some(question) = self.questions.get(self.state.question_index).cloned() else {
            warn!("Answer {:?} ignored: no current question", answer);
            return;
        };

        match (&question, answer) {
            (Question::QuickCount(q), Answer::Number(n)) => {
                let correct = n == q.count;
                self.report(correct);
                if correct {
                    self.count_correct(q);
                } else {
                    self.count_incorrect(q);
                }
            }
            (Question::Memory(_), Answer::Option(index)) => {
                let Some(chosen) = self.state.displayed_options.get(index).cloned() else {
                    debug!("Option {} is not displayed", index);
                    return;
                };
                let correct = self.state.current_correct_option == Some(index);
                self.report(correct);
                if correct {
                    self.memory_correct(&chosen);
                } else {
                    self.memory_incorrect();
                }
            }
            (_, answer) => debug!("Answer {:?} does not fit the current question", answer),
        }
    }

    fn count_correct(&mut self, question: &CountQuestion) {
        let value = format!("{} {}", question.count, question.object_label());
        self.award();
        self.renderer.render(RenderCommand::Feedback {
            text: format!("Correct! {}!", value),
            tone: FeedbackTone::Correct,
        });
        self.speech.speak(&format!(
            "Excellent! That's correct! {}! Say next to continue.",
            value
        ));
        self.await_next();
    }

    fn count_incorrect(&mut self, question: &CountQuestion) {
        self.renderer.render(RenderCommand::Feedback {
            text: format!("Wrong! The answer is {}. Try again.", question.count),
            tone: FeedbackTone::Incorrect,
        });
        self.speech.speak(&format!(
            "Wrong answer. The correct answer is {}. Try again. {}",
            question.count,
            question.prompt()
        ));
    }

    fn memory_correct(&mut self, chosen: &str) {
        self.award();
        self.renderer.render(RenderCommand::Feedback {
            text: format!("Correct! {}! Well done!", chosen),
            tone: FeedbackTone::Correct,
        });
        self.speech.speak(&format!(
            "Excellent! That's correct! {}! Say next to continue.",
            spoken_label(chosen)
        ));
        self.await_next();
    }

    fn memory_incorrect(&mut self) {
        self.renderer.render(RenderCommand::Feedback {
            text: "Wrong answer. Try again!".to_string(),
            tone: FeedbackTone::Incorrect,
        });
        self.speech.speak("Wrong answer. Try again.");
    }

    fn award(&mut self) {
        self.state.score += SCORE_AWARD;
        self.state.correct_count += 1;
        self.renderer.render(RenderCommand::Score {
            score: self.state.score,
            level: self.state.level,
        });
    }

    fn await_next(&mut self) {
        self.state.awaiting_answer = false;
        self.state.awaiting_next = true;
        self.state.phase = Phase::AwaitingNext;
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Next,
            visible: true,
        });
    }

    fn report(&self, correct: bool) {
        let Some(mode) = self.state.mode else {
            return;
        };

        let response_time_ms = self
            .state
            .question_shown_at
            .map(|shown| shown.elapsed().as_millis() as u64)
            .unwrap_or(0);

        self.reporter.report(Outcome {
            session_id: self.state.session_id,
            game_key: mode.game_key().to_string(),
            correct,
            response_time_ms,
            answered_at: Utc::now(),
        });
    }

    fn complete_level(&mut self) {
        self.timer.cancel();
        self.state.clear_question();

        let total = self.questions.len();
        let correct = self.state.correct_count;
        let summary = format!("You answered {} out of {} correctly.", correct, total);
        let encouragement = if total > 0 && correct as usize == total {
            "Perfect score! Amazing!"
        } else {
            "Great job!"
        };

        info!(
            "Question set finished: {}/{} correct, score {}",
            correct, total, self.state.score
        );

        let (title, spoken) = match self.state.mode {
            Some(GameMode::Memory) => {
                self.state.phase = Phase::GameComplete;
                (
                    format!("Game Complete! Score: {}", self.state.score),
                    format!(
                        "Game complete! Your score is {}. {} {} Say start game to play again.",
                        self.state.score, summary, encouragement
                    ),
                )
            }
            _ => {
                self.state.phase = Phase::LevelComplete;
                (
                    "Level Complete!".to_string(),
                    format!(
                        "Level complete! {} {} Say start game to play again.",
                        summary, encouragement
                    ),
                )
            }
        };

        self.renderer.render(RenderCommand::Prompt(title));
        self.renderer.render(RenderCommand::ClearStage);
        self.renderer.render(RenderCommand::Feedback {
            text: format!("{} {}", summary, encouragement),
            tone: FeedbackTone::Correct,
        });
        self.speech.speak(&spoken);
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Start,
            visible: true,
        });
        self.renderer
            .render(RenderCommand::StartLabel("Play Again".to_string()));
    }

    /// Blank the stage for a fresh session
    fn reset_stage(&mut self) {
        self.renderer.render(RenderCommand::ClearStage);
        self.renderer.render(RenderCommand::ClearFeedback);
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Start,
            visible: true,
        });
        self.renderer
            .render(RenderCommand::StartLabel("Start Game".to_string()));
        self.renderer.render(RenderCommand::SetControl {
            control: Control::Next,
            visible: false,
        });
        self.renderer.render(RenderCommand::Score {
            score: self.state.score,
            level: self.state.level,
        });
    }
}

/// Option label without its leading emoji, for speaking
fn spoken_label(label: &str) -> &str {
    label.trim_start_matches(|c: char| !c.is_alphanumeric())
}

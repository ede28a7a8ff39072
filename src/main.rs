use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use voice_quiz::console::{spawn_console_input, ConsoleRecognizer, ConsoleRenderer};
use voice_quiz::content::{ContentProvider, StaticContent};
use voice_quiz::game::{self, GameController, Input};
use voice_quiz::recognizer::{self, RecognizerAdapter};
use voice_quiz::speech::{LogSynthesizer, SpeechEmitter, SpeechParams};
use voice_quiz::{AppState, Config, ScoreBoard, ScoreBoardReporter};

#[derive(Debug, Parser)]
#[command(name = "voice-quiz", about = "Voice-controlled quiz games for kids")]
struct Cli {
    /// Config file (without extension)
    #[arg(long, default_value = "config/voice-quiz")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the score API and static assets
    Serve,
    /// Play in the terminal: type what you would say, or /commands for clicks
    Play {
        /// Also serve the score API while playing
        #[arg(long)]
        serve: bool,
        /// Play without voice input, as on a host with no recognizer
        #[arg(long)]
        no_voice: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let scores = ScoreBoard::new();

    match cli.command {
        Command::Serve => {
            voice_quiz::http::serve(&cfg.service.http, AppState::new(scores, &cfg.service.assets_path))
                .await
        }
        Command::Play { serve, no_voice } => play(cfg, scores, serve, no_voice).await,
    }
}

async fn play(cfg: Config, scores: ScoreBoard, serve: bool, no_voice: bool) -> Result<()> {
    let content: Arc<dyn ContentProvider> = match &cfg.game.content_path {
        Some(path) => Arc::new(StaticContent::from_json_file(path)?),
        None => Arc::new(StaticContent::builtin()),
    };

    if serve {
        let state = AppState::new(scores.clone(), &cfg.service.assets_path);
        let http = cfg.service.http.clone();
        tokio::spawn(async move {
            if let Err(e) = voice_quiz::http::serve(&http, state).await {
                error!("HTTP server stopped: {:#}", e);
            }
        });
    }

    let (input_tx, input_rx) = mpsc::channel::<Input>(64);
    let (speech_tx, speech_rx) = mpsc::channel(64);
    let (recognizer_handle, control_rx) = recognizer::control_channel();

    let engine = ConsoleRecognizer::new();
    spawn_console_input(engine.listening_flag(), speech_tx, input_tx.clone());

    let speech = SpeechEmitter::new(Box::new(LogSynthesizer), SpeechParams::from(&cfg.speech))
        .with_enabled(cfg.speech.enabled);

    let mut controller = GameController::new(
        cfg.pacing.clone(),
        content,
        Box::new(ConsoleRenderer),
        speech,
        Box::new(recognizer_handle),
        Arc::new(ScoreBoardReporter::new(scores.clone())),
    )
    .with_start_level(cfg.game.start_level);

    if no_voice {
        drop(speech_rx);
        controller.handle_input(Input::RecognitionUnsupported);
    } else {
        let adapter = RecognizerAdapter::new(engine, &cfg.pacing).with_listening(cfg.speech.enabled);
        let out = input_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = adapter.run(speech_rx, control_rx, out).await {
                error!("Recognizer adapter failed: {:#}", e);
            }
        });
    }

    controller.welcome();
    drop(input_tx);

    let controller = game::run(controller, input_rx).await?;

    let summary = scores.snapshot().await;
    for (game, score) in summary {
        info!(
            "{}: {}/{} correct, avg {:.0}ms",
            game, score.score, score.total_questions, score.avg_speed
        );
    }
    info!("Final score: {}", controller.state().score);

    Ok(())
}

mod common;

use anyhow::Result;
use common::harness;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use voice_quiz::config::PacingConfig;
use voice_quiz::content::StaticContent;
use voice_quiz::game::{self, Phase};
use voice_quiz::intent::PointerEvent;
use voice_quiz::recognizer::{control_channel, RecognitionEvent, RecognizerAdapter};
use voice_quiz::console::ConsoleRecognizer;
use voice_quiz::Input;

#[tokio::test(start_paused = true)]
async fn test_intro_delay_drives_first_question() -> Result<()> {
    let h = harness(StaticContent::builtin());
    let (tx, rx) = mpsc::channel(8);
    let task = tokio::spawn(game::run(h.controller, rx));

    tx.send(Input::Utterance("quickcount".to_string())).await?;
    tx.send(Input::Utterance("start".to_string())).await?;

    // before the intro beat ends, answers are dropped
    sleep(Duration::from_millis(1000)).await;
    tx.send(Input::Utterance("three".to_string())).await?;

    sleep(Duration::from_millis(1100)).await;
    tx.send(Input::Utterance("three".to_string())).await?;
    drop(tx);

    let controller = task.await??;
    assert_eq!(controller.state().score, 10);
    assert_eq!(controller.phase(), Phase::AwaitingNext);
    assert_eq!(h.reporter.outcomes().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_back_cancels_memory_reveal() -> Result<()> {
    let h = harness(StaticContent::builtin());
    let (tx, rx) = mpsc::channel(8);
    let task = tokio::spawn(game::run(h.controller, rx));

    tx.send(Input::Pointer(PointerEvent::SelectGame(voice_quiz::GameMode::Memory)))
        .await?;
    tx.send(Input::Pointer(PointerEvent::Start)).await?;
    sleep(Duration::from_millis(2500)).await;
    tx.send(Input::Utterance("back".to_string())).await?;

    // well past the reveal deadline
    sleep(Duration::from_secs(10)).await;
    drop(tx);

    let controller = task.await??;
    assert_eq!(controller.phase(), Phase::Dashboard);
    assert!(controller.state().displayed_options.is_empty());
    assert!(h.renderer.last_options().is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_voice_pipeline_end_to_end() -> Result<()> {
    let h = harness(StaticContent::builtin());
    let engine = ConsoleRecognizer::new();
    let listening = engine.listening_flag();

    let (input_tx, input_rx) = mpsc::channel::<Input>(16);
    let (events_tx, events_rx) = mpsc::channel(16);
    let (_handle, control_rx) = control_channel();

    let adapter = RecognizerAdapter::new(engine, &PacingConfig::default());
    let adapter_task = tokio::spawn(adapter.run(events_rx, control_rx, input_tx));
    let game_task = tokio::spawn(game::run(h.controller, input_rx));

    sleep(Duration::from_millis(10)).await;
    assert!(listening.load(std::sync::atomic::Ordering::SeqCst));

    for text in ["Quickcount", "Start game"] {
        events_tx
            .send(RecognitionEvent::Result {
                transcript: text.to_string(),
                is_final: true,
            })
            .await?;
    }
    sleep(Duration::from_millis(2500)).await;
    events_tx
        .send(RecognitionEvent::Result {
            transcript: "Three!".to_string(),
            is_final: true,
        })
        .await?;
    drop(events_tx);

    adapter_task.await??;
    let controller = game_task.await??;
    assert_eq!(controller.state().score, 10);
    Ok(())
}

use super::controller::GameController;
use super::input::Input;
use anyhow::Result;
use futures::future::OptionFuture;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::info;

/// Drive the controller until every input sender is dropped.
///
/// Inputs are handled strictly in arrival order. Between inputs the loop
/// waits for the controller's pending transition, if it has one. Returns
/// the controller so callers can inspect the final session.
pub async fn run(
    mut controller: GameController,
    mut inputs: mpsc::Receiver<Input>,
) -> Result<GameController> {
    info!("Game loop started");

    loop {
        let timer: OptionFuture<_> = controller.next_deadline().map(sleep_until).into();

        tokio::select! {
            input = inputs.recv() => match input {
                Some(input) => controller.handle_input(input),
                None => break,
            },
            Some(()) = timer => {
                controller.fire_due(Instant::now());
            }
        }
    }

    info!(
        "Game loop stopped (score {}, {} correct)",
        controller.state().score,
        controller.state().correct_count
    );

    Ok(controller)
}

//! The single context that owns the controller

use std::{future::Future, sync::Arc};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use super::dispatcher::dispatch;
use crate::{
    controller::{parse_command, Command, CommandError, Event, GameController, Request},
    render::Renderer,
    services::GameService,
};

/// Feed every event to the controller, one at a time, until quit or shutdown
///
/// `startup` requests are dispatched before the first event. The controller is
/// handed back when the loop ends.
pub async fn run<S, R, F>(
    service: Arc<S>,
    mut controller: GameController<R>,
    events_tx: UnboundedSender<Event>,
    mut events: UnboundedReceiver<Event>,
    startup: Vec<Request>,
    shutdown: F,
) -> GameController<R>
where
    S: GameService,
    R: Renderer,
    F: Future<Output = ()>,
{
    info!("Event loop running");
    for request in startup {
        dispatch(Arc::clone(&service), request, events_tx.clone());
    }

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
            event = events.recv() => {
                let Some(event) = event else {
                    debug!("Event channel closed");
                    break;
                };
                if event == Event::Command(Command::Quit) {
                    info!("Quit requested");
                    break;
                }
                for request in controller.handle(event) {
                    dispatch(Arc::clone(&service), request, events_tx.clone());
                }
            }
        }
    }

    controller
}

/// Read commands line by line and post them as events
///
/// End of input is posted as a quit.
pub fn spawn_input_reader<I>(input: I, events: UnboundedSender<Event>, default_damage: u32) -> JoinHandle<()>
where
    I: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = input.lines();
        loop {
            let event = match lines.next_line().await {
                Ok(Some(line)) => match parse_command(&line, default_damage) {
                    Ok(command) => Event::Command(command),
                    Err(CommandError::Empty) => continue,
                    Err(e) => Event::Invalid(e.to_string()),
                },
                Ok(None) => {
                    debug!("Input closed");
                    Event::Command(Command::Quit)
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    Event::Command(Command::Quit)
                }
            };

            let quitting = event == Event::Command(Command::Quit);
            if events.send(event).is_err() || quitting {
                break;
            }
        }
    })
}

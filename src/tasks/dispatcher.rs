//! Runs controller requests against the game service

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{
    controller::{Action, ActionReply, Event, Reply, Request},
    services::GameService,
};

/// Run `request` on its own task and post the reply back as an event
///
/// The event loop keeps handling ticks while the round-trip is pending.
pub fn dispatch<S: GameService>(service: Arc<S>, request: Request, events: UnboundedSender<Event>) {
    tokio::spawn(async move {
        let reply = execute(service.as_ref(), request).await;
        if events.send(Event::Reply(reply)).is_err() {
            debug!("Event loop gone, dropping reply to {:?}", request);
        }
    });
}

/// Perform one request and wrap the result as a [`Reply`]
pub async fn execute<S: GameService>(service: &S, request: Request) -> Reply {
    debug!("Executing {:?}", request);
    match request {
        Request::QuerySession => Reply::Session(service.query_session().await),
        Request::NotifyStart => Reply::Started(service.notify_start().await),
        Request::Submit { action, epoch } => Reply::Action {
            action,
            epoch,
            result: submit(service, action).await,
        },
        Request::QueryStatus { attempt, epoch } => Reply::Status {
            attempt,
            epoch,
            result: service.query_status().await,
        },
        Request::Restart => Reply::Restarted(service.restart().await),
        Request::InitWorld => Reply::WorldReady(service.init_world().await),
    }
}

async fn submit<S: GameService>(
    service: &S,
    action: Action,
) -> Result<ActionReply, crate::services::ServiceError> {
    match action {
        Action::Move(direction) => service.move_to(direction).await.map(ActionReply::text),
        Action::Pickup => service.pickup().await.map(ActionReply::text),
        Action::Heal => service.heal().await.map(ActionReply::text),
        Action::Damage(amount) => service.damage(amount).await.map(ActionReply::text),
        Action::Fight => service.fight().await.map(|reply| ActionReply {
            outcome: reply.outcome(),
            text: reply.message,
        }),
    }
}

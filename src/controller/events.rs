//! Events the controller consumes and requests it emits

use crate::{
    services::{FightOutcome, ServiceError, StatusReport},
    state::Control,
};

pub use crate::services::Direction;

/// A gameplay action sent to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Pickup,
    Fight,
    Heal,
    Damage(u32),
}

impl Action {
    /// The control that gates this action
    pub fn control(&self) -> Control {
        match self {
            Action::Move(_) => Control::Move,
            Action::Pickup => Control::Pickup,
            Action::Fight => Control::Fight,
            Action::Heal => Control::Heal,
            Action::Damage(_) => Control::Damage,
        }
    }
}

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Act(Action),
    Restart,
    /// Answer to the restart prompt
    Confirm(bool),
    /// Re-run the on-load reconciliation
    Reload,
    /// Refresh the status fields on demand
    Status,
    Help,
    Quit,
}

/// Network work the controller wants done
///
/// Requests whose replies touch the running game carry the session `epoch`
/// they were issued in, so a reply that outlives a restart or reload is
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    QuerySession,
    NotifyStart,
    Submit { action: Action, epoch: u64 },
    /// `attempt` counts retries, starting at zero
    QueryStatus { attempt: u8, epoch: u64 },
    Restart,
    InitWorld,
}

/// Text returned for an action, plus the fight outcome when there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReply {
    pub text: String,
    pub outcome: FightOutcome,
}

impl ActionReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: FightOutcome::Ongoing,
        }
    }
}

/// Result of a [`Request`], delivered back to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Session(Result<bool, ServiceError>),
    Started(Result<String, ServiceError>),
    Action {
        action: Action,
        epoch: u64,
        result: Result<ActionReply, ServiceError>,
    },
    Status {
        attempt: u8,
        epoch: u64,
        result: Result<StatusReport, ServiceError>,
    },
    Restarted(Result<String, ServiceError>),
    WorldReady(Result<String, ServiceError>),
}

impl Reply {
    /// Session epoch of the request, for replies that carry one
    pub fn epoch(&self) -> Option<u64> {
        match self {
            Reply::Action { epoch, .. } | Reply::Status { epoch, .. } => Some(*epoch),
            _ => None,
        }
    }
}

/// Everything that reaches the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One second passed on the tick emitter of `generation`
    Tick { generation: u64 },
    Command(Command),
    /// A line that did not parse as a command
    Invalid(String),
    Reply(Reply),
}

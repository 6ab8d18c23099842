//! Game lifecycle phase and the controls it allows

use std::fmt;

/// Lifecycle phase as seen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    /// Reached by timer expiry or a terminal fight outcome
    Ended,
}

/// One user-facing control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Move,
    Pickup,
    Fight,
    Heal,
    Damage,
    Restart,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::Start,
        Control::Move,
        Control::Pickup,
        Control::Fight,
        Control::Heal,
        Control::Damage,
        Control::Restart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::Start => "start",
            Control::Move => "move",
            Control::Pickup => "pickup",
            Control::Fight => "fight",
            Control::Heal => "heal",
            Control::Damage => "damage",
            Control::Restart => "restart",
        }
    }

    fn is_gameplay(&self) -> bool {
        !matches!(self, Control::Start | Control::Restart)
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which controls are enabled and whether the objective panel is visible
///
/// Never stored on its own; always derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    start: bool,
    gameplay: bool,
    restart: bool,
    pub objective_visible: bool,
}

impl Affordances {
    /// Everything disabled, used until the session flag is known
    pub fn none() -> Self {
        Self {
            start: false,
            gameplay: false,
            restart: false,
            objective_visible: false,
        }
    }

    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::NotStarted => Self {
                start: true,
                gameplay: false,
                restart: false,
                objective_visible: true,
            },
            Phase::InProgress => Self {
                start: false,
                gameplay: true,
                restart: true,
                objective_visible: false,
            },
            Phase::Ended => Self {
                start: false,
                gameplay: false,
                restart: true,
                objective_visible: false,
            },
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Start => self.start,
            Control::Restart => self.restart,
            other => other.is_gameplay() && self.gameplay,
        }
    }

    /// Enabled controls in display order
    pub fn enabled(&self) -> Vec<Control> {
        Control::ALL
            .iter()
            .copied()
            .filter(|control| self.is_enabled(*control))
            .collect()
    }
}

/// Client-side session bookkeeping owned by the controller
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    /// Local copy of the service's session flag, resynchronized on load and start/restart
    pub game_started: bool,
    /// True until the first session reply arrives
    pub loading: bool,
    /// A restart is waiting for the user to confirm
    pub confirming_restart: bool,
    /// Bumped each time a game is entered or left for the start screen
    pub epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            game_started: false,
            loading: true,
            confirming_restart: false,
            epoch: 0,
        }
    }

    pub fn affordances(&self) -> Affordances {
        if self.loading {
            Affordances::none()
        } else {
            Affordances::for_phase(self.phase)
        }
    }

    pub fn enter(&mut self, phase: Phase) {
        self.loading = false;
        self.phase = phase;
        self.game_started = phase == Phase::InProgress;
    }

    /// Start a new session epoch; replies tagged with an older one are stale
    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

//! Game lifecycle controller
//!
//! The controller owns the session bookkeeping and the countdown. It turns
//! events into render calls and hands network work back to the caller as
//! [`Request`]s, so it never blocks on the service.

pub mod command;
pub mod events;

use tracing::{debug, info, warn};

use crate::{
    render::Renderer,
    services::{ServiceError, StatusReport},
    state::{Affordances, Control, Phase, SessionState, TickOutcome},
    tasks::Countdown,
};

pub use command::{parse_command, CommandError, DEFAULT_DAMAGE, HELP};
pub use events::{Action, ActionReply, Command, Direction, Event, Reply, Request};

pub const INITIAL_HEALTH: &str = "100";
pub const INITIAL_ROOM: &str = "";
pub const INITIAL_INVENTORY: &str = "(empty)";
pub const INITIAL_ENEMIES: &str = "20 / 20";

pub const START_MESSAGE: &str = "The dungeon stirs... Traveler begins their quest!";
pub const EXPIRED_MESSAGE: &str = "⏰ Time’s up! The dungeon collapses around Traveler!";
pub const RESTART_PROMPT: &str = "Are you sure you want to restart the game? All progress will be lost? [y/N]";
pub const RESTART_CANCELLED: &str = "Restart cancelled.";
pub const UNAVAILABLE: &str = "That action is not available right now.";

/// Drives the client side of one game
pub struct GameController<R: Renderer> {
    session: SessionState,
    countdown: Countdown,
    renderer: R,
    /// Skip the restart prompt
    auto_confirm: bool,
}

impl<R: Renderer> GameController<R> {
    /// Create a controller and paint the initial screen
    pub fn new(countdown: Countdown, renderer: R, auto_confirm: bool) -> Self {
        let mut controller = Self {
            session: SessionState::new(),
            countdown,
            renderer,
            auto_confirm,
        };
        controller.reset_display();
        controller.render_timer();
        controller.render_controls();
        controller
    }

    /// Requests to issue when the client comes up
    pub fn load(&self, init_world: bool) -> Vec<Request> {
        if init_world {
            vec![Request::InitWorld]
        } else {
            vec![Request::QuerySession]
        }
    }

    /// Handle one event and return the requests it produced
    pub fn handle(&mut self, event: Event) -> Vec<Request> {
        match event {
            Event::Tick { generation } => {
                self.on_tick(generation);
                Vec::new()
            }
            Event::Command(command) => self.on_command(command),
            Event::Invalid(reason) => {
                self.renderer.output(&reason);
                Vec::new()
            }
            Event::Reply(reply) => self.on_reply(reply),
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn game_started(&self) -> bool {
        self.session.game_started
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub fn is_confirming_restart(&self) -> bool {
        self.session.confirming_restart
    }

    /// Current session epoch, carried by action and status requests
    pub fn epoch(&self) -> u64 {
        self.session.epoch
    }

    pub fn affordances(&self) -> Affordances {
        self.session.affordances()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn on_tick(&mut self, generation: u64) {
        match self.countdown.tick(generation) {
            TickOutcome::Idle => {}
            TickOutcome::Running { .. } => self.render_timer(),
            TickOutcome::Expired => {
                self.render_timer();
                self.renderer.output(EXPIRED_MESSAGE);
                self.lock_out();
            }
        }
    }

    fn on_command(&mut self, command: Command) -> Vec<Request> {
        if self.session.confirming_restart {
            self.session.confirming_restart = false;
            if command == Command::Confirm(true) {
                info!("Restart confirmed");
                return vec![Request::Restart];
            }
            debug!("Restart prompt answered with {:?}, cancelling", command);
            self.renderer.output(RESTART_CANCELLED);
            return Vec::new();
        }

        match command {
            Command::Start => self.start(),
            Command::Act(action) => {
                if !self.allowed(action.control()) {
                    return Vec::new();
                }
                vec![Request::Submit {
                    action,
                    epoch: self.session.epoch,
                }]
            }
            Command::Restart => {
                if !self.allowed(Control::Restart) {
                    return Vec::new();
                }
                if self.auto_confirm {
                    return vec![Request::Restart];
                }
                self.session.confirming_restart = true;
                self.renderer.output(RESTART_PROMPT);
                Vec::new()
            }
            Command::Confirm(_) => {
                self.renderer.output("Nothing to confirm.");
                Vec::new()
            }
            Command::Reload => {
                info!("Reloading session state");
                vec![Request::QuerySession]
            }
            Command::Status => vec![self.refresh()],
            Command::Help => {
                self.renderer.output(HELP);
                Vec::new()
            }
            // The event loop stops before quitting reaches us
            Command::Quit => Vec::new(),
        }
    }

    fn start(&mut self) -> Vec<Request> {
        if self.session.game_started {
            debug!("Start ignored, a game is already running");
            return Vec::new();
        }
        if !self.allowed(Control::Start) {
            return Vec::new();
        }
        self.session.game_started = true;
        vec![Request::NotifyStart]
    }

    fn allowed(&mut self, control: Control) -> bool {
        if self.session.affordances().is_enabled(control) {
            true
        } else {
            debug!("Control {} is disabled in phase {:?}", control, self.session.phase);
            self.renderer.output(UNAVAILABLE);
            false
        }
    }

    fn on_reply(&mut self, reply: Reply) -> Vec<Request> {
        if let Some(epoch) = reply.epoch() {
            if epoch != self.session.epoch {
                debug!("Dropping stale reply from epoch {} (current {}): {:?}", epoch, self.session.epoch, reply);
                return Vec::new();
            }
        }

        match reply {
            Reply::WorldReady(result) => {
                match result {
                    Ok(message) => self.renderer.output(&message),
                    Err(e) => self.report_error("Dungeon reset failed", &e),
                }
                vec![Request::QuerySession]
            }
            Reply::Session(Ok(true)) => {
                info!("Resuming game in progress");
                self.enter_in_progress()
            }
            Reply::Session(Ok(false)) => {
                info!("No game in progress");
                self.enter_not_started();
                Vec::new()
            }
            Reply::Session(Err(e)) => {
                self.report_error("Could not load the game state", &e);
                self.enter_not_started();
                Vec::new()
            }
            Reply::Started(Ok(_)) => {
                self.renderer.output(START_MESSAGE);
                self.enter_in_progress()
            }
            Reply::Started(Err(e)) => {
                self.session.game_started = false;
                self.report_error("Could not start the game", &e);
                Vec::new()
            }
            Reply::Action { action, result, .. } => self.on_action_reply(action, result),
            Reply::Status { attempt, result, .. } => self.on_status(attempt, result),
            Reply::Restarted(Ok(message)) => {
                self.renderer.output(&message);
                self.reset_display();
                self.enter_not_started();
                info!("Game restarted");
                Vec::new()
            }
            Reply::Restarted(Err(e)) => {
                self.report_error("Restart failed", &e);
                Vec::new()
            }
        }
    }

    fn on_action_reply(&mut self, action: Action, result: Result<ActionReply, ServiceError>) -> Vec<Request> {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                self.report_error("Action failed", &e);
                return Vec::new();
            }
        };

        self.renderer.output(&reply.text);
        let refresh = vec![self.refresh()];

        if action == Action::Fight && reply.outcome.is_terminal() {
            info!("Fight ended the game: {:?}", reply.outcome);
            self.lock_out();
        }
        refresh
    }

    fn on_status(&mut self, attempt: u8, result: Result<StatusReport, ServiceError>) -> Vec<Request> {
        match result {
            Ok(report) => {
                self.renderer.health(&report.health_text());
                self.renderer.room(&report.room_text());
                self.renderer.inventory(&report.inventory_text());
                self.renderer.enemies(&report.enemies_text());
                Vec::new()
            }
            Err(e) if attempt == 0 => {
                warn!("Status refresh failed, retrying once: {}", e);
                vec![Request::QueryStatus {
                    attempt: 1,
                    epoch: self.session.epoch,
                }]
            }
            Err(e) => {
                warn!("Status refresh failed again, keeping stale status: {}", e);
                self.renderer.output(&format!("⚠ Status unavailable: {}", e));
                Vec::new()
            }
        }
    }

    fn refresh(&self) -> Request {
        Request::QueryStatus {
            attempt: 0,
            epoch: self.session.epoch,
        }
    }

    fn enter_in_progress(&mut self) -> Vec<Request> {
        self.session.next_epoch();
        self.session.enter(Phase::InProgress);
        self.renderer.objective(false);
        self.render_controls();
        self.countdown.start();
        self.render_timer();
        vec![self.refresh()]
    }

    fn enter_not_started(&mut self) {
        self.session.next_epoch();
        self.session.enter(Phase::NotStarted);
        self.renderer.objective(true);
        self.render_controls();
        self.countdown.reset();
        self.render_timer();
    }

    /// Only restart stays enabled and the clock stops
    fn lock_out(&mut self) {
        self.countdown.stop();
        self.session.enter(Phase::Ended);
        self.render_controls();
    }

    fn reset_display(&mut self) {
        self.renderer.health(INITIAL_HEALTH);
        self.renderer.room(INITIAL_ROOM);
        self.renderer.inventory(INITIAL_INVENTORY);
        self.renderer.enemies(INITIAL_ENEMIES);
    }

    fn render_timer(&mut self) {
        let timer = self.countdown.state();
        let text = timer.display();
        let low_time = timer.is_low_time();
        self.renderer.timer(&text, low_time);
    }

    fn render_controls(&mut self) {
        let affordances = self.session.affordances();
        self.renderer.controls(&affordances);
    }

    fn report_error(&mut self, context: &str, error: &ServiceError) {
        warn!("{}: {}", context, error);
        self.renderer.output(&format!("⚠ {}: {}", context, error));
    }
}

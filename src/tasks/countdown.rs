//! Countdown clock and its background tick emitter

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time::interval};
use tracing::{debug, info};

use crate::{
    controller::Event,
    state::{TickOutcome, TimerState},
};

/// Time between two ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The game clock plus the task that feeds it ticks
///
/// Each emitter is tagged with a generation. Starting again aborts the old
/// emitter and bumps the generation, so ticks it already queued are ignored.
#[derive(Debug)]
pub struct Countdown {
    state: TimerState,
    generation: u64,
    ticker: Option<JoinHandle<()>>,
    events: UnboundedSender<Event>,
}

impl Countdown {
    pub fn new(events: UnboundedSender<Event>) -> Self {
        Self {
            state: TimerState::new(),
            generation: 0,
            ticker: None,
            events,
        }
    }

    /// Rewind to the full duration and begin ticking
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(&mut self) {
        self.cancel_ticker();
        self.state.start();
        self.generation += 1;

        let generation = self.generation;
        let events = self.events.clone();
        info!("Starting countdown for {}s (generation {})", self.state.total(), generation);

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = interval(TICK_PERIOD);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if events.send(Event::Tick { generation }).is_err() {
                    debug!("Event loop gone, stopping tick emitter {}", generation);
                    break;
                }
            }
        }));
    }

    /// Apply one tick from the emitter of `generation`
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation {
            debug!("Dropping stale tick from generation {}", generation);
            return TickOutcome::Idle;
        }

        let outcome = self.state.tick();
        if outcome == TickOutcome::Expired {
            info!("Countdown expired");
            self.cancel_ticker();
        }
        outcome
    }

    /// Halt ticking and keep the remaining time
    pub fn stop(&mut self) {
        self.cancel_ticker();
        self.state.stop();
    }

    /// Halt ticking and rewind to the full duration
    pub fn reset(&mut self) {
        self.cancel_ticker();
        self.state.reset();
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Generation of the live emitter, zero before the first start
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            debug!("Cancelled tick emitter {}", self.generation);
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

//! Background tasks module
//!
//! This module contains the tick emitter, the request dispatcher and the
//! event loop that ties them to the controller.

pub mod countdown;
pub mod dispatcher;
pub mod event_loop;

// Re-export main types and functions
pub use countdown::{Countdown, TICK_PERIOD};
pub use dispatcher::{dispatch, execute};
pub use event_loop::{run, spawn_input_reader};

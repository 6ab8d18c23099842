//! State management module
//!
//! This module contains the countdown and session structures the controller owns.

pub mod session_state;
pub mod timer_state;

// Re-export main types
pub use session_state::{Affordances, Control, Phase, SessionState};
pub use timer_state::{format_clock, TickOutcome, TimerState, GAME_DURATION_SECS, LOW_TIME_THRESHOLD_SECS};

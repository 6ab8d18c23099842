//! Utility functions module
//!
//! Process-level helpers that sit outside the game logic.

pub mod signals;

pub use signals::shutdown_signal;

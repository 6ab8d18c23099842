//! Dungeon Clock - a terminal client for a dungeon-crawler game service
//!
//! This library provides the client side of the game: a countdown clock,
//! lifecycle reconciliation with the service's session flag, and the
//! commands that call the service and render its replies.

pub mod config;
pub mod controller;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::GameController;
pub use services::{GameService, HttpGameService};
pub use utils::signals::shutdown_signal;

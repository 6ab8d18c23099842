//! External service module
//!
//! This module contains the game service contract, its reply structures and
//! the HTTP client that speaks to the real service.

pub mod error;
pub mod game_service;
pub mod http;
pub mod responses;

// Re-export main types
pub use error::ServiceError;
pub use game_service::{Direction, GameService};
pub use http::HttpGameService;
pub use responses::{EnemyCount, FightOutcome, FightReply, Inventory, StatusReport, PLACEHOLDER};

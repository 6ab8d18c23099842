//! Contract with the remote game service

use std::{fmt, future::Future, str::FromStr};

use serde::Serialize;

use super::{
    error::ServiceError,
    responses::{FightReply, StatusReport},
};

/// A compass direction accepted by the move call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// Calls the client makes against the game service
///
/// The service owns the game rules and the session flag. Every method is one
/// request/response round-trip with no timeout of its own.
pub trait GameService: Send + Sync + 'static {
    /// Ask whether a game is currently active
    fn query_session(&self) -> impl Future<Output = Result<bool, ServiceError>> + Send;

    /// Flip the session flag to active
    fn notify_start(&self) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Move the traveler, returning the new room description
    fn move_to(
        &self,
        direction: Direction,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn pickup(&self) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn damage(&self, amount: u32) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn fight(&self) -> impl Future<Output = Result<FightReply, ServiceError>> + Send;

    fn heal(&self) -> impl Future<Output = Result<String, ServiceError>> + Send;

    fn query_status(&self) -> impl Future<Output = Result<StatusReport, ServiceError>> + Send;

    /// Reset service-side game state
    fn restart(&self) -> impl Future<Output = Result<String, ServiceError>> + Send;

    /// Rebuild the dungeon from scratch
    fn init_world(&self) -> impl Future<Output = Result<String, ServiceError>> + Send;
}

//! Game service reply structures

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Rendered in place of a status field that was missing or unreadable
pub const PLACEHOLDER: &str = "?";

/// Reply to the session query
#[derive(Debug, Clone, Deserialize)]
pub struct SessionReply {
    #[serde(rename = "gameStarted")]
    pub game_started: bool,
}

/// Reply carrying a `message` text (start, pickup, damage, heal, restart, init)
#[derive(Debug, Clone, Deserialize)]
pub struct MessageReply {
    pub message: String,
}

/// Reply to a move, which carries a room `description`
#[derive(Debug, Clone, Deserialize)]
pub struct MoveReply {
    pub description: String,
}

/// How a fight left the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Ongoing,
    Won,
    /// Traveler died; the service's "Game Over"
    Fallen,
    TimeExpired,
}

impl FightOutcome {
    /// Whether this outcome ends the game
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FightOutcome::Ongoing)
    }

    /// Parse the structured `outcome` code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ongoing" => Some(FightOutcome::Ongoing),
            "won" => Some(FightOutcome::Won),
            "fallen" => Some(FightOutcome::Fallen),
            "time_expired" => Some(FightOutcome::TimeExpired),
            _ => None,
        }
    }

    /// Classify the free-text message of a service that sends no outcome code
    pub fn from_legacy_text(message: &str) -> Self {
        if message.contains("Traveler Wins!") {
            FightOutcome::Won
        } else if message.contains("fallen") || message.contains("Game Over") {
            FightOutcome::Fallen
        } else if message.contains("Time's up") || message.contains("Time\u{2019}s up") {
            FightOutcome::TimeExpired
        } else {
            FightOutcome::Ongoing
        }
    }
}

/// Reply to a fight, with an optional structured outcome
#[derive(Debug, Clone, Deserialize)]
pub struct FightReply {
    pub message: String,
    #[serde(default)]
    pub outcome: Option<String>,
}

impl FightReply {
    /// Prefer the outcome code, fall back to reading the message
    pub fn outcome(&self) -> FightOutcome {
        match self.outcome.as_deref() {
            Some(code) => FightOutcome::from_code(code).unwrap_or_else(|| {
                warn!("Unknown fight outcome code {:?}, reading message instead", code);
                FightOutcome::from_legacy_text(&self.message)
            }),
            None => FightOutcome::from_legacy_text(&self.message),
        }
    }
}

/// Carried items in the order the service listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<(String, u64)>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            items: pairs.into_iter().map(|(name, count)| (name.into(), count)).collect(),
        }
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, (name, count)) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            if *count > 1 {
                write!(f, "{} ×{}", name, count)?;
            } else {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

/// Remaining and total enemies in the dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyCount {
    pub remaining: u64,
    pub total: u64,
}

impl fmt::Display for EnemyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.remaining, self.total)
    }
}

/// Status reply, read field by field so one bad field does not hide the rest
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReport {
    pub health: Option<i64>,
    pub room: Option<String>,
    pub inventory: Option<Inventory>,
    pub enemies: Option<EnemyCount>,
}

impl StatusReport {
    pub fn from_value(value: &Value) -> Self {
        let report = Self {
            health: value.get("health").and_then(Value::as_i64),
            room: value.get("room").and_then(|room| match room {
                Value::String(name) => Some(name.clone()),
                Value::Number(id) => Some(id.to_string()),
                _ => None,
            }),
            inventory: value.get("inventory_counts").and_then(parse_inventory),
            enemies: match (
                value.get("remaining_enemies").and_then(Value::as_u64),
                value.get("total_enemies").and_then(Value::as_u64),
            ) {
                (Some(remaining), Some(total)) => Some(EnemyCount { remaining, total }),
                _ => None,
            },
        };

        let missing = report.missing_fields();
        if !missing.is_empty() {
            warn!("Status reply missing or malformed fields: {:?}", missing);
        }
        report
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.health.is_none() {
            missing.push("health");
        }
        if self.room.is_none() {
            missing.push("room");
        }
        if self.inventory.is_none() {
            missing.push("inventory_counts");
        }
        if self.enemies.is_none() {
            missing.push("enemies");
        }
        missing
    }

    pub fn health_text(&self) -> String {
        self.health
            .map(|health| health.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn room_text(&self) -> String {
        self.room.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn inventory_text(&self) -> String {
        self.inventory
            .as_ref()
            .map(|inventory| inventory.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn enemies_text(&self) -> String {
        self.enemies
            .map(|enemies| enemies.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

fn parse_inventory(value: &Value) -> Option<Inventory> {
    let counts = value.as_object()?;
    let mut items = Vec::with_capacity(counts.len());
    for (name, count) in counts {
        items.push((name.clone(), count.as_u64()?));
    }
    Some(Inventory { items })
}

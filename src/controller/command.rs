//! Parsing typed input into commands

use thiserror::Error;

use super::events::{Action, Command, Direction};

/// Damage dealt by the `damage` command when no amount is given
pub const DEFAULT_DAMAGE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}', type 'help' for the list")]
    Unknown(String),
    #[error("{0}")]
    BadArgument(String),
}

pub const HELP: &str = "Commands: start | n/s/e/w or move <direction> | pickup | fight | heal | \
damage [amount] | restart | status | reload | help | quit";

/// Parse one line of input
///
/// `default_damage` is used when `damage` has no amount.
pub fn parse_command(line: &str, default_damage: u32) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    let head = head.to_ascii_lowercase();
    let arg = words.next();

    let command = match head.as_str() {
        "start" => Command::Start,
        "restart" => Command::Restart,
        "y" | "yes" => Command::Confirm(true),
        "no" => Command::Confirm(false),
        "reload" => Command::Reload,
        "status" | "st" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "pickup" | "take" | "p" => Command::Act(Action::Pickup),
        "fight" | "f" => Command::Act(Action::Fight),
        "heal" | "h" => Command::Act(Action::Heal),
        "damage" => {
            let amount = match arg {
                Some(amount) => amount
                    .parse::<u32>()
                    .map_err(|_| CommandError::BadArgument(format!("not an amount: {}", amount)))?,
                None => default_damage,
            };
            Command::Act(Action::Damage(amount))
        }
        "move" | "go" => {
            let direction = arg
                .ok_or_else(|| CommandError::BadArgument("move where? north, south, east or west".to_string()))?
                .parse::<Direction>()
                .map_err(CommandError::BadArgument)?;
            Command::Act(Action::Move(direction))
        }
        other => match other.parse::<Direction>() {
            Ok(direction) => Command::Act(Action::Move(direction)),
            Err(_) => return Err(CommandError::Unknown(other.to_string())),
        },
    };

    Ok(command)
}

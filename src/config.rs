//! Configuration and CLI argument handling

use clap::Parser;

use crate::controller::DEFAULT_DAMAGE;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "dungeon-clock")]
#[command(about = "Play the dungeon-crawler game service from the terminal, against the clock")]
#[command(version)]
pub struct Config {
    /// Base URL of the game service
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Session cookie value to resume an existing game
    #[arg(long)]
    pub cookie: Option<String>,

    /// Damage dealt by `damage` when no amount is typed
    #[arg(short, long, default_value_t = DEFAULT_DAMAGE)]
    pub damage: u32,

    /// Restart without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Rebuild the dungeon on the service before loading
    #[arg(long)]
    pub init_world: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

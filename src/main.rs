//! Dungeon Clock - a terminal client for a dungeon-crawler game service
//!
//! This is the main entry point for the dungeon-clock application.

use std::sync::Arc;
use tokio::{io::BufReader, sync::mpsc::unbounded_channel};
use tracing::info;

use dungeon_clock::{
    config::Config,
    controller::GameController,
    render::TerminalRenderer,
    services::HttpGameService,
    tasks::{run, spawn_input_reader, Countdown},
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they stay out of the game output
    tracing_subscriber::fmt()
        .with_env_filter(format!("dungeon_clock={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting dungeon-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: server={}, damage={}, auto_confirm={}",
          config.server, config.damage, config.yes);

    let service = Arc::new(HttpGameService::new(&config.server, config.cookie.as_deref())?);

    let (events_tx, events_rx) = unbounded_channel();
    let countdown = Countdown::new(events_tx.clone());
    let controller = GameController::new(countdown, TerminalRenderer::stdout(), config.yes);
    let startup = controller.load(config.init_world);

    let input = spawn_input_reader(BufReader::new(tokio::io::stdin()), events_tx.clone(), config.damage);

    run(service, controller, events_tx, events_rx, startup, shutdown_signal()).await;

    input.abort();
    info!("Client shutdown complete");
    // A pending stdin read holds a blocking thread the runtime would wait on
    std::process::exit(0)
}

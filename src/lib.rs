//! rollcall library root.
//! Exposes the CLI parser, the high-level run() function, and the controllers
//! behind every command.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => commands::login::handle(&cli.command, cfg).await,
        Commands::Logout => commands::logout::handle(cfg),
        Commands::Home { .. } => commands::home::handle(&cli.command, cfg).await,
        Commands::Take { .. } => commands::take::handle(&cli.command, cfg).await,
        Commands::Confirm => commands::confirm::handle(cfg),
        Commands::Submit => commands::submit::handle(cfg).await,
        Commands::Absent { .. } => commands::absent::handle(&cli.command, cfg).await,
        Commands::Substitute { .. } => commands::substitute::handle(&cli.command, cfg).await,
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(url) = &cli.backend {
        cfg.backend_url = url.clone();
    }

    init_tracing(&cfg);

    // 3️⃣ single-threaded runtime: network calls interleave, nothing runs in parallel
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&cli, &cfg))
}

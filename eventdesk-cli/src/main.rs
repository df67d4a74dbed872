mod commands;
mod render;
mod utils;

use std::env;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eventdesk_core::config::EventdeskConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "Create, browse and edit events for the length of a session")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default). Events last until you quit.
    Shell,
    /// Show the config file location and current settings
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let config = EventdeskConfig::load().context("Failed to load config")?;
            commands::shell::run(&config)
        }
        Commands::Config => commands::config::run(),
    }
}

/// Logs go to stderr so they never interleave with rendered events.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("EVENTDESK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "eventdesk_core=debug,eventdesk=debug,info"
        } else {
            "warn"
        })
    });

    let format = env::var("EVENTDESK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

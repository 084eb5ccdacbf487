//! Kalah command line front end.
//!
//! ## Usage
//!
//! - `kalah` / `kalah play` - Read text commands from stdin (see `session`)
//! - `kalah simulate --games 1000` - Tally random playouts
//! - `kalah default-config` - Print the default TOML configuration

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kalah_core::board::Board;
use kalah_core::config::AppConfig;
use kalah_core::session::Session;
use kalah_core::simulation::batch_random_playouts;

/// Two-player Mancala (Kalah) rules engine
#[derive(Parser)]
#[command(name = "kalah")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, default_value = "kalah.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play by typing commands on stdin
    Play,
    /// Play random games with alternating turns and print the results
    Simulate {
        #[arg(short, long, default_value_t = 1000)]
        games: u32,
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
    /// Print the default configuration
    DefaultConfig,
}

fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries session responses
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::DefaultConfig) = cli.command {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_tracing(&config.logging.filter);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Simulate { games, seed }) => {
            let tally = batch_random_playouts(Board::initial(), games, seed);
            println!("player 1 wins: {}", tally.one_wins);
            println!("player 2 wins: {}", tally.two_wins);
            println!("ties:          {}", tally.ties);
        }
        Some(Commands::Play) | None => {
            let mut session = Session::from_config(&config)?;
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("session I/O")?;
        }
        Some(Commands::DefaultConfig) => {}
    }

    Ok(())
}

//! Pacer CLI - pacer command

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use cli_lib::replay::Mode;
use std::path::PathBuf;
use tracing::Level;

mod cmd;

/// Pacer - debounce and throttle playground
#[derive(Parser)]
#[command(name = "pacer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/pacer/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a call schedule through a debouncer
    Debounce {
        /// Quiet period in ms (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        delay_ms: Option<i64>,
        /// Call offsets in ms, comma separated (e.g. 0,100,200,900)
        #[arg(long)]
        at: String,
    },
    /// Replay a call schedule through a throttle
    Throttle {
        /// Cooldown window in ms (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        delay_ms: Option<i64>,
        /// Call offsets in ms, comma separated (e.g. 0,500,1000,2500)
        #[arg(long)]
        at: String,
    },
    /// Throttled "Hello" button driven by stdin lines
    Click {
        /// Cooldown window in ms (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        delay_ms: Option<i64>,
    },
    /// Show configuration
    Config {
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// Print an example config file
        #[arg(long, conflicts_with = "path")]
        example: bool,
        /// Print a single value (e.g. throttle.delay_ms)
        #[arg(long, value_name = "KEY", conflicts_with_all = ["path", "example"])]
        get: Option<String>,
        /// Set a value and write the config file (e.g. throttle.delay_ms=500)
        #[arg(
            long,
            value_name = "KEY=VALUE",
            conflicts_with_all = ["path", "example", "get"]
        )]
        set: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Debounce { delay_ms, at } => {
            cmd::replay::run(Mode::Debounce, delay_ms, &at, config).await
        }
        Commands::Throttle { delay_ms, at } => {
            cmd::replay::run(Mode::Throttle, delay_ms, &at, config).await
        }
        Commands::Click { delay_ms } => cmd::click::run(delay_ms, config).await,
        Commands::Config { path, example, get, set } => {
            if let Some(assignment) = set {
                cmd::config::run_set(&assignment, config).await
            } else if let Some(key) = get {
                cmd::config::run_get(&key, config).await
            } else if example {
                cmd::config::run_example().await
            } else if path {
                cmd::config::run_path(config).await
            } else {
                cmd::config::run_list(config).await
            }
        }
    }
}

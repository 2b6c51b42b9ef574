mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "fsroute")]
#[command(version, about = "fsroute CLI - file-system route tables and request resolution", long_about = None)]
struct Cli {
    /// Project directory containing the routes root
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Config file (default: <project>/fsroute.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every file in the route table
    Routes,

    /// Check for routes that collide once group folders are stripped
    Check,

    /// Resolve a request URI to its content file and layout chain
    Resolve {
        /// Request URI, e.g. /users/42?tab=posts
        uri: String,

        /// Treat the request as a same-origin fetch (unlocks private routes)
        #[arg(long)]
        same_origin: bool,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List loading views with the URL each one covers
    Loading,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match dotenvy::from_path(cli.project.join(".env")) {
        Ok(()) => debug!("Loaded environment from .env"),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to load .env"),
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.project.join(CONFIG_FILE));
    let config = Config::load(&config_path)?
        .with_env_override(std::env::var("APP_ENV").ok().as_deref());

    let table = config.load_table(&cli.project)?;

    match cli.command {
        Commands::Routes => {
            commands::routes::execute(&table);
        }
        Commands::Check => {
            commands::check::execute(&table, config.project.environment)?;
        }
        Commands::Resolve {
            uri,
            same_origin,
            json,
        } => {
            commands::resolve::execute(&table, &config, &uri, same_origin, json)?;
        }
        Commands::Loading => {
            commands::loading::execute(&table);
        }
    }

    Ok(())
}

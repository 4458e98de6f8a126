//! NewsPrefs - terminal form for newsletter subscription preferences
//!
//! CLI entry point for editing and inspecting the persisted record.

use std::fs;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use newsprefs::cli::{self, Cli, Command};
use newsprefs::config::Config;
use newsprefs::tui;
use prefstore::{JsonFileStore, PrefStore, SOURCE_CATALOG};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = cli::log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Write to a log file, not stdout/stderr - that would corrupt the TUI
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("NewsPrefs store directory: {}", config.storage.store_dir.display());

    match cli.command {
        Some(Command::Show) => cmd_show(&config),
        Some(Command::Edit) | None => cmd_edit(&config).await,
    }
}

/// Print the saved preferences without entering the form
fn cmd_show(config: &Config) -> Result<()> {
    let store = JsonFileStore::open(&config.storage.store_dir).context("Failed to open preference store")?;

    match store.load()? {
        Some(record) => {
            let email = if record.email.is_empty() { "-" } else { &record.email };
            println!("Email: {}", email);

            println!("Sources:");
            for source in SOURCE_CATALOG {
                let mark = if record.has_source(source.id) { "x" } else { " " };
                println!("  [{}] {}", mark, source.label);
            }

            println!("Interests:");
            for interest in &record.interests {
                println!("  - {}", interest);
            }

            match record.frequency {
                Some(frequency) => println!("Frequency: {}", frequency.label()),
                None => println!("Frequency: not set"),
            }
        }
        None => println!("No saved preferences"),
    }

    Ok(())
}

/// Open the interactive form
async fn cmd_edit(config: &Config) -> Result<()> {
    let store = JsonFileStore::open(&config.storage.store_dir).context("Failed to open preference store")?;

    tui::run_with_store(Box::new(store), config).await
}

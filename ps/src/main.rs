use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use prefstore::cli::{Cli, Command};
use prefstore::config::Config;
use prefstore::{Frequency, JsonFileStore, PrefStore, PreferencesRecord, SOURCE_CATALOG, is_known_source};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("prefstore starting");

    let store = JsonFileStore::open(&config.store_path)?;

    match cli.command {
        Command::Show => match store.load()? {
            Some(record) => print_record(&record),
            None => println!("No saved preferences"),
        },
        Command::Path => {
            println!("{}", store.slot_path().display());
        }
        Command::SetEmail { email } => {
            let mut record = store.load()?.unwrap_or_default();
            record.email = email.clone();
            store.save(&record)?;
            println!("{} Email set to {}", "✓".green(), email.cyan());
        }
        Command::ToggleSource { source } => {
            if !is_known_source(&source) {
                let known: Vec<&str> = SOURCE_CATALOG.iter().map(|s| s.id).collect();
                return Err(eyre::eyre!("Unknown source: {} (catalog: {})", source, known.join(", ")));
            }
            let mut record = store.load()?.unwrap_or_default();
            let selected = record.toggle_source(&source);
            store.save(&record)?;
            let state = if selected { "selected" } else { "deselected" };
            println!("{} Source {} {}", "✓".green(), source.cyan(), state);
        }
        Command::AddInterest { interest } => {
            let mut record = store.load()?.unwrap_or_default();
            if record.add_interest(&interest) {
                store.save(&record)?;
                println!("{} Added interest {}", "✓".green(), interest.cyan());
            } else {
                println!("Interest {} already present (or empty), nothing to do", interest.cyan());
            }
        }
        Command::RemoveInterest { interest } => {
            let mut record = store.load()?.unwrap_or_default();
            record.remove_interest(&interest);
            store.save(&record)?;
            println!("{} Removed interest {}", "✓".green(), interest.cyan());
        }
        Command::SetFrequency { frequency } => {
            let frequency: Frequency = frequency.parse()?;
            let mut record = store.load()?.unwrap_or_default();
            record.frequency = Some(frequency);
            store.save(&record)?;
            println!("{} Frequency set to {}", "✓".green(), frequency.to_string().cyan());
        }
    }

    Ok(())
}

fn print_record(record: &PreferencesRecord) {
    let email = if record.email.is_empty() { "-" } else { &record.email };
    println!("Email: {}", email.cyan());

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
        None => println!("Frequency: {}", "not set".dimmed()),
    }
}

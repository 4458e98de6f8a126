//! CLI argument parsing for prefstore

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ps")]
#[command(author, version, about = "Newsletter subscription preference store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the saved preferences
    Show,

    /// Print the path of the storage slot
    Path,

    /// Replace the stored email address
    SetEmail {
        #[arg(required = true)]
        email: String,
    },

    /// Flip a news source on or off
    ToggleSource {
        /// Source identifier from the catalog (nzz, economist)
        #[arg(required = true)]
        source: String,
    },

    /// Append an interest (empty or duplicate drafts are ignored)
    AddInterest {
        #[arg(required = true)]
        interest: String,
    },

    /// Remove an interest
    RemoveInterest {
        #[arg(required = true)]
        interest: String,
    },

    /// Replace the delivery frequency
    SetFrequency {
        /// One of: daily, weekly, monthly
        #[arg(required = true)]
        frequency: String,
    },
}

//! CLI argument parsing for NewsPrefs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "np")]
#[command(author, version, about = "Newsletter subscription preferences", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the preferences form (default)
    Edit,

    /// Print the saved preferences and exit
    Show,
}

/// Path of the np log file
pub fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newsprefs")
        .join("logs")
        .join("np.log")
}

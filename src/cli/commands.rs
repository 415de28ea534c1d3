use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// multishare UI - headless client UI helpers
#[derive(Parser, Debug)]
#[command(name = "multishare-ui")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this directory instead of the platform config directory
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Log level, overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format byte counts for display
    Size {
        /// Byte counts
        #[arg(required = true)]
        bytes: Vec<u64>,
    },

    /// Drive a simulated connection lifecycle and print the document
    Demo {
        /// Leave the container out of the document
        #[arg(long)]
        no_container: bool,

        /// Override how long "Connected" stays visible (milliseconds)
        #[arg(short, long)]
        window_ms: Option<u64>,
    },

    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the settings file location
    Path,

    /// Write the default configuration
    Init,
}

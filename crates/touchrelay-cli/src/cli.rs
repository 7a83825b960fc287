use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// touchrelay: replay and inspect cross-frame touch relay traffic.
#[derive(Parser, Debug)]
#[command(name = "touchrelay", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `touchrelay_host=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a JSON scenario through a host page and its zones.
    Replay {
        scenario: PathBuf,

        /// Enable markers and instrumentation on both sides.
        #[arg(long)]
        debug: bool,
    },

    /// Decode one wire message and print the validated event.
    Decode { message: String },

    /// Load, validate and print the effective config.
    Config {
        /// Read this file instead of the default location.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

//! touchrelay: command-line front end for the touch relay.
//!
//! `replay` drives a scenario through a host page and its zones and prints
//! every dispatched event as a JSON line. `decode` validates one wire
//! message. `config` prints the effective configuration.

mod cli;
mod replay;
mod scenario;

use std::path::Path;
use std::process::ExitCode;

use touchrelay_common::RelayError;
use touchrelay_config::{config_to_json, TouchRelayConfig};
use touchrelay_protocol::RelayMessage;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::scenario::Scenario;

const DEFAULT_DIRECTIVE: &str = "touchrelay=info";

fn load_config(path: Option<&Path>) -> Result<TouchRelayConfig, RelayError> {
    let config = match path {
        Some(path) => touchrelay_config::load_from_path(path)?,
        None => touchrelay_config::load_config()?,
    };
    Ok(config)
}

fn init_logging(override_directive: Option<&str>, config: &TouchRelayConfig) {
    let configured = format!("touchrelay={}", config.logging.level);
    let directive = override_directive.unwrap_or(&configured);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .or_else(|_| DEFAULT_DIRECTIVE.parse())
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command, config: TouchRelayConfig) -> Result<(), RelayError> {
    match command {
        Command::Replay { scenario, debug } => {
            let raw = std::fs::read_to_string(&scenario)?;
            let scenario = Scenario::from_json(&raw)
                .map_err(|e| RelayError::Other(format!("invalid scenario {}: {e}", scenario.display())))?;
            let report = replay::replay(&scenario, &config, debug)?;
            let lines = report
                .to_json_lines()
                .map_err(|e| RelayError::Other(format!("failed to serialize report: {e}")))?;
            for line in lines {
                println!("{line}");
            }
        }
        Command::Decode { message } => {
            if RelayMessage::peek_kind(&message).is_none() {
                println!("ignored");
                return Ok(());
            }
            match RelayMessage::from_json(&message)?.decode()? {
                Some(event) => println!("{event:#?}"),
                None => println!("ignored"),
            }
        }
        Command::Config { path } => {
            let config = match path {
                Some(path) => {
                    let config = touchrelay_config::load_from_path(&path)?;
                    touchrelay_config::validation::validate(&config)?;
                    config
                }
                None => config,
            };
            println!("{}", config_to_json(&config));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(args.log_level.as_deref(), &config);

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(args.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "touchrelay failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Touch relay configuration.
//!
//! TOML-based; every section uses serde defaults so partial files work.
//!
//! ```rust,no_run
//! use touchrelay_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HostConfig, LoggingConfig, TouchRelayConfig, ZoneConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use touchrelay_common::ConfigError;

/// Load and validate config from the platform default path.
pub fn load_config() -> Result<TouchRelayConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TouchRelayConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

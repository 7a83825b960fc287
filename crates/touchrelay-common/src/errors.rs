use std::path::PathBuf;

use crate::types::ZoneKey;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A relay message that carries a recognized tag but cannot be turned into
/// an event.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProtocolError {
    #[error("malformed relay message: {0}")]
    Malformed(String),

    #[error("relay message '{event}' is missing field '{field}'")]
    MissingField {
        event: &'static str,
        field: &'static str,
    },

    #[error("relay message '{0}' carries an empty touch list")]
    EmptyTouchList(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("zone {zone} has no loaded content context")]
    ContextUnavailable { zone: ZoneKey },

    #[error("zone {zone} stopped listening for relay messages")]
    ChannelClosed { zone: ZoneKey },

    #[error("{0}")]
    Other(String),
}

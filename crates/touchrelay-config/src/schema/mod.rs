//! Configuration schema types.
//!
//! All structs use `serde(default)`; missing fields take the defaults below.

mod host;
mod logging;
mod zone;

pub use host::*;
pub use logging::*;
pub use zone::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchRelayConfig {
    pub host: HostConfig,
    pub zone: ZoneConfig,
    pub logging: LoggingConfig,
}

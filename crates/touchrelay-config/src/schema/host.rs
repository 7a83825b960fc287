use serde::{Deserialize, Serialize};

/// Sender-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Emit instrumentation marks for intercepted and sent events.
    pub debug: bool,
    /// Stamp relay messages with their send time while debugging.
    pub timestamps: bool,
    /// DOM id of the capture overlay; its presence marks an attached relay.
    pub overlay_id: String,
    pub overlay_z_index: i32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            debug: false,
            timestamps: true,
            overlay_id: "iframe-relay-touches-overlay".into(),
            overlay_z_index: 1000,
        }
    }
}

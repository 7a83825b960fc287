use serde::{Deserialize, Serialize};

/// Receiver-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Draw markers at received points and emit instrumentation marks.
    pub debug: bool,
    /// How long a debug marker stays on screen.
    pub marker_delay_ms: u64,
    /// Marker diameter in CSS pixels.
    pub marker_size: f64,
    /// Class carried by every marker; elements with it are never hit-test targets.
    pub marker_class: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            debug: false,
            marker_delay_ms: 1000,
            marker_size: 30.0,
            marker_class: "debug-iframe-relay-point".into(),
        }
    }
}

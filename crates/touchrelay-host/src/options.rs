use std::sync::Arc;

use touchrelay_config::HostConfig;
use touchrelay_protocol::{MarkSink, TracingSink};
use touchrelay_zones::{DecoderRef, OriginOffset};

/// Options for [`crate::HostRelay::attach`].
#[derive(Clone)]
pub struct HostRelayOptions {
    pub debug: bool,
    /// Stamp relay messages with their send time (only while `debug`).
    pub timestamps: bool,
    pub overlay_id: String,
    pub overlay_z_index: i32,
    pub decoder: DecoderRef,
    pub marks: Arc<dyn MarkSink>,
}

impl Default for HostRelayOptions {
    fn default() -> Self {
        Self::from_config(&HostConfig::default())
    }
}

impl HostRelayOptions {
    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            debug: config.debug,
            timestamps: config.timestamps,
            overlay_id: config.overlay_id.clone(),
            overlay_z_index: config.overlay_z_index,
            decoder: Arc::new(OriginOffset),
            marks: Arc::new(TracingSink),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replace the default origin-offset translation.
    pub fn with_decoder(mut self, decoder: DecoderRef) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn with_mark_sink(mut self, marks: Arc<dyn MarkSink>) -> Self {
        self.marks = marks;
        self
    }
}

impl std::fmt::Debug for HostRelayOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRelayOptions")
            .field("debug", &self.debug)
            .field("timestamps", &self.timestamps)
            .field("overlay_id", &self.overlay_id)
            .field("overlay_z_index", &self.overlay_z_index)
            .finish_non_exhaustive()
    }
}

use std::sync::Arc;
use std::time::Duration;

use touchrelay_config::ZoneConfig;
use touchrelay_protocol::{MarkSink, TracingSink};

/// Options for [`crate::ZoneReceiver::attach`].
#[derive(Clone)]
pub struct ReceiverOptions {
    pub debug: bool,
    pub marker_delay: Duration,
    pub marker_size: f64,
    pub marker_class: String,
    pub marks: Arc<dyn MarkSink>,
}

impl Default for ReceiverOptions {
    fn default() -> Self {
        Self::from_config(&ZoneConfig::default())
    }
}

impl ReceiverOptions {
    pub fn from_config(config: &ZoneConfig) -> Self {
        Self {
            debug: config.debug,
            marker_delay: Duration::from_millis(config.marker_delay_ms),
            marker_size: config.marker_size,
            marker_class: config.marker_class.clone(),
            marks: Arc::new(TracingSink),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_marker_delay(mut self, delay: Duration) -> Self {
        self.marker_delay = delay;
        self
    }

    pub fn with_mark_sink(mut self, marks: Arc<dyn MarkSink>) -> Self {
        self.marks = marks;
        self
    }
}

impl std::fmt::Debug for ReceiverOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiverOptions")
            .field("debug", &self.debug)
            .field("marker_delay", &self.marker_delay)
            .field("marker_size", &self.marker_size)
            .field("marker_class", &self.marker_class)
            .finish_non_exhaustive()
    }
}

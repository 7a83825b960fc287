//! Timestamped instrumentation marks for end-to-end latency tracing.
//!
//! Each relayed interaction can produce four marks: intercepted on the host,
//! sent to a zone, received by the zone, and dispatched in the zone. Marks
//! are only produced in debug mode and never influence routing.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checkpoint {
    Intercepted,
    Sent,
    Received,
    Dispatched,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mark {
    pub checkpoint: Checkpoint,
    pub name: String,
    pub at: DateTime<Utc>,
    pub detail: serde_json::Value,
}

/// Destination for instrumentation marks.
pub trait MarkSink: Send + Sync {
    fn record(&self, mark: Mark);
}

/// Emits marks as `debug` events on the `touchrelay::marks` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MarkSink for TracingSink {
    fn record(&self, mark: Mark) {
        tracing::debug!(
            target: "touchrelay::marks",
            checkpoint = ?mark.checkpoint,
            name = %mark.name,
            at = %mark.at.to_rfc3339(),
            detail = %mark.detail,
            "mark"
        );
    }
}

/// Keeps marks in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    marks: Mutex<Vec<Mark>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all recorded marks.
    pub fn take(&self) -> Vec<Mark> {
        let mut marks = self.marks.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *marks)
    }
}

impl MarkSink for RecordingSink {
    fn record(&self, mark: Mark) {
        self.marks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mark);
    }
}

/// Gate in front of a sink: marks are built and recorded only when enabled.
#[derive(Clone)]
pub struct Instrumentation {
    enabled: bool,
    sink: Arc<dyn MarkSink>,
}

impl Instrumentation {
    pub fn new(enabled: bool, sink: Arc<dyn MarkSink>) -> Self {
        Self { enabled, sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a mark. `detail` is only evaluated when enabled.
    pub fn mark(
        &self,
        checkpoint: Checkpoint,
        name: impl Into<String>,
        detail: impl FnOnce() -> serde_json::Value,
    ) {
        if !self.enabled {
            return;
        }
        self.sink.record(Mark {
            checkpoint,
            name: name.into(),
            at: Utc::now(),
            detail: detail(),
        });
    }
}

impl std::fmt::Debug for Instrumentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrumentation")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Wall-clock milliseconds since the Unix epoch, the unit of `RelayMessage::time`.
pub fn epoch_millis() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1000.0
}

//! Relay protocol between the host page and its zones.
//!
//! Messages flow one way, host -> zone:
//! - The host partitions a raw event, translates each point into zone-local
//!   coordinates and posts one flat [`RelayMessage`] per zone (or per point,
//!   for single-point events) through that zone's [`RelayPort`].
//! - The zone receives the serialized message on its [`RelayInbox`], decodes
//!   it into a [`RelayEvent`] and rebuilds a native-shaped event locally.
//!
//! There is no acknowledgment and no retry. A message posted to a closed
//! port is lost.

pub mod channel;
pub mod event;
pub mod marks;
pub mod message;

pub use channel::{channel, PostError, RelayInbox, RelayPort};
pub use event::{EventKind, EventShape, UnknownEventKind};
pub use marks::{epoch_millis, Checkpoint, Instrumentation, Mark, MarkSink, RecordingSink, TracingSink};
pub use message::{RelayEvent, RelayMessage, TouchRecord};

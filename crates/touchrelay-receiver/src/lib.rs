//! Zone-side half of the touch relay.
//!
//! A [`ZoneReceiver`] turns relay messages arriving on a zone's inbox back
//! into native-shaped events on the zone's own document. Each message is
//! handled to completion before the next one is looked at; nothing is
//! tracked between messages except debug markers waiting to expire.

pub mod markers;
pub mod options;
pub mod receiver;
pub mod resolve;

pub use markers::{marker_color, MarkerBoard, MARKER_PALETTE};
pub use options::ReceiverOptions;
pub use receiver::{Reception, ZoneReceiver};
pub use resolve::resolve_target;

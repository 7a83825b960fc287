//! Zones: the embedded child frames events can be routed to.
//!
//! - [`ZoneSurface`] is what the host knows about a zone: its current
//!   on-screen bounds and, once loaded, a port into its context.
//! - [`partition`] buckets raw points by zone using strict containment.
//! - [`CoordinateDecoder`] maps global points into zone-local space.

pub mod partition;
pub mod surface;
pub mod translate;

pub use partition::{partition, partition_one, ZoneBuckets};
pub use surface::{post_to_zone, FrameZone, ZoneRef, ZoneSurface};
pub use translate::{CoordinateDecoder, DecoderRef, OriginOffset, ScaledOffset};

//! Sender side of the touch relay.
//!
//! [`HostRelay`] owns the zone registry for one page. Once attached it
//! places a full-viewport capture overlay on the page; raw input captured
//! there is handed to [`HostRelay::handle_raw`], partitioned by zone,
//! translated into zone-local coordinates and relayed. Points outside every
//! zone are re-dispatched on the host document itself.

mod dispatch;
mod input;
mod options;
mod overlay;
mod relay;

pub use dispatch::DispatchSummary;
pub use input::{Disposition, RawInput};
pub use options::HostRelayOptions;
pub use overlay::{Overlay, INTERCEPTED_KINDS};
pub use relay::HostRelay;

use std::sync::{Arc, PoisonError, RwLock};

use touchrelay_common::{Rect, RelayError, ZoneKey};
use touchrelay_protocol::{channel, PostError, RelayInbox, RelayMessage, RelayPort};

/// An embedding surface on the host page.
pub trait ZoneSurface: Send + Sync {
    /// Human-readable name, for logs.
    fn name(&self) -> &str;

    /// Current on-screen bounds. Queried on every use; never cached.
    fn bounding_rect(&self) -> Rect;

    /// Port into the embedded context, or `None` while nothing is loaded.
    fn content_port(&self) -> Option<RelayPort>;
}

pub type ZoneRef = Arc<dyn ZoneSurface>;

/// Post `message` into the context of the zone registered under `key`.
pub fn post_to_zone(
    zone: &dyn ZoneSurface,
    key: ZoneKey,
    message: &RelayMessage,
) -> Result<(), RelayError> {
    let port = zone
        .content_port()
        .ok_or(RelayError::ContextUnavailable { zone: key })?;
    port.post(message).map_err(|e| match e {
        PostError::Closed => RelayError::ChannelClosed { zone: key },
        PostError::Encode(e) => RelayError::Protocol(e),
    })
}

/// A child frame with movable bounds whose context can be loaded and unloaded.
#[derive(Debug)]
pub struct FrameZone {
    name: String,
    bounds: RwLock<Rect>,
    port: RwLock<Option<RelayPort>>,
}

impl FrameZone {
    /// A frame with nothing loaded yet.
    pub fn new(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            bounds: RwLock::new(bounds),
            port: RwLock::new(None),
        }
    }

    /// Load a fresh context and return its inbox. Any previously loaded
    /// context stops receiving.
    pub fn load(&self) -> RelayInbox {
        let (port, inbox) = channel();
        *self.port.write().unwrap_or_else(PoisonError::into_inner) = Some(port);
        inbox
    }

    pub fn unload(&self) {
        *self.port.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn set_bounds(&self, bounds: Rect) {
        *self.bounds.write().unwrap_or_else(PoisonError::into_inner) = bounds;
    }
}

impl ZoneSurface for FrameZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounding_rect(&self) -> Rect {
        *self.bounds.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn content_port(&self) -> Option<RelayPort> {
        self.port
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchrelay_common::Point;
    use touchrelay_protocol::EventKind;

    fn click() -> RelayMessage {
        RelayMessage::single_point(EventKind::Click, Point::new(1.0, 1.0), None)
    }

    #[test]
    fn unloaded_frame_has_no_context() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        let err = post_to_zone(&zone, ZoneKey::Zone(0), &click()).unwrap_err();
        assert!(matches!(
            err,
            RelayError::ContextUnavailable {
                zone: ZoneKey::Zone(0)
            }
        ));
    }

    #[test]
    fn loaded_frame_receives_posts() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut inbox = zone.load();
        post_to_zone(&zone, ZoneKey::Zone(0), &click()).unwrap();
        let raw = inbox.try_recv().unwrap();
        assert_eq!(RelayMessage::from_json(&raw).unwrap(), click());
    }

    #[test]
    fn dropped_inbox_reports_closed_channel() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        drop(zone.load());
        let err = post_to_zone(&zone, ZoneKey::Zone(1), &click()).unwrap_err();
        assert!(matches!(
            err,
            RelayError::ChannelClosed {
                zone: ZoneKey::Zone(1)
            }
        ));
    }

    #[test]
    fn reload_replaces_context() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut first = zone.load();
        let mut second = zone.load();
        post_to_zone(&zone, ZoneKey::Zone(0), &click()).unwrap();
        assert!(first.try_recv().is_none());
        assert!(second.try_recv().is_some());
    }

    #[test]
    fn unload_drops_context() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        let _inbox = zone.load();
        zone.unload();
        assert!(zone.content_port().is_none());
    }

    #[test]
    fn bounds_are_live() {
        let zone = FrameZone::new("left", Rect::new(0.0, 0.0, 10.0, 10.0));
        zone.set_bounds(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(zone.bounding_rect(), Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(zone.name(), "left");
    }
}

//! Debug markers: short-lived dots drawn where relayed points land.

use tokio::time::Instant;
use touchrelay_common::{Color, Point, Rect};
use touchrelay_dom::{Document, ElementId, ElementSpec};
use tracing::trace;

use crate::options::ReceiverOptions;

/// Marker colors for identifiers `0..=10`.
pub const MARKER_PALETTE: [Color; 11] = [
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0x00, 0xff),
    Color::rgb(0x00, 0x00, 0xff),
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0xff, 0xa8, 0x00),
    Color::rgb(0xff, 0xa8, 0xff),
    Color::rgb(0x00, 0xa8, 0xff),
    Color::rgb(0xa8, 0xff, 0xff),
    Color::rgb(0xa8, 0x00, 0xff),
];

/// Palette entry for `identifier`; black when absent or out of range.
pub fn marker_color(identifier: Option<i32>) -> Color {
    identifier
        .and_then(|id| usize::try_from(id).ok())
        .and_then(|i| MARKER_PALETTE.get(i).copied())
        .unwrap_or(Color::BLACK)
}

#[derive(Debug, Clone, Copy)]
struct LiveMarker {
    element: ElementId,
    expires_at: Instant,
}

/// Markers currently on the page and when each one has to go.
#[derive(Debug, Default)]
pub struct MarkerBoard {
    live: Vec<LiveMarker>,
}

impl MarkerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker centered on `at` that expires `marker_delay` after `now`.
    pub fn draw<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        at: Point,
        identifier: Option<i32>,
        options: &ReceiverOptions,
        now: Instant,
    ) -> ElementId {
        let size = options.marker_size;
        let half = size / 2.0;
        let mut spec = ElementSpec::new(Rect::new(at.x - half, at.y - half, size, size))
            .with_class(options.marker_class.as_str())
            .with_class("point")
            .with_background(marker_color(identifier))
            .rounded();
        if let Some(id) = identifier {
            spec = spec.with_id(format!("touch-{id}"));
        }
        let element = doc.append(spec);
        self.live.push(LiveMarker {
            element,
            expires_at: now + options.marker_delay,
        });
        trace!(%element, x = at.x, y = at.y, ?identifier, "marker drawn");
        element
    }

    /// Remove every marker whose deadline is at or before `now`.
    /// Returns how many were removed.
    pub fn sweep<D: Document + ?Sized>(&mut self, doc: &mut D, now: Instant) -> usize {
        let before = self.live.len();
        self.live.retain(|marker| {
            if marker.expires_at > now {
                return true;
            }
            doc.remove(marker.element);
            false
        });
        before - self.live.len()
    }

    /// Remove all markers regardless of deadline.
    pub fn clear<D: Document + ?Sized>(&mut self, doc: &mut D) {
        for marker in self.live.drain(..) {
            doc.remove(marker.element);
        }
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.live.iter().map(|m| m.expires_at).min()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

//! Bucket dispatch: host bucket re-dispatched locally, zone buckets relayed.

use serde_json::json;
use touchrelay_common::{InteractionPoint, Point, ZoneKey};
use touchrelay_dom::{Document, SyntheticEvent};
use touchrelay_protocol::{epoch_millis, Checkpoint, EventKind, EventShape, RelayMessage};
use touchrelay_zones::{post_to_zone, ZoneBuckets};
use tracing::{debug, error};

use crate::relay::Attachment;

/// What one dispatch call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Events dispatched on the host document.
    pub host_events: usize,
    /// Messages posted to zones.
    pub relayed: usize,
    /// Messages that could not be delivered and were dropped.
    pub dropped: usize,
}

impl Attachment {
    pub(crate) fn dispatch<D: Document>(
        &self,
        page: &mut D,
        kind: EventKind,
        buckets: &ZoneBuckets<InteractionPoint>,
    ) -> DispatchSummary {
        let mut summary = DispatchSummary::default();

        for (key, points) in buckets.iter() {
            if points.is_empty() {
                continue;
            }
            match key {
                ZoneKey::Host => {
                    summary.host_events += self.dispatch_on_host(page, kind, points);
                }
                ZoneKey::Zone(index) => {
                    let (relayed, dropped) = self.relay_to_zone(index, kind, points);
                    summary.relayed += relayed;
                    summary.dropped += dropped;
                }
            }
        }

        debug!(
            kind = %kind,
            host_events = summary.host_events,
            relayed = summary.relayed,
            dropped = summary.dropped,
            "dispatched"
        );
        summary
    }

    fn dispatch_on_host<D: Document>(
        &self,
        page: &mut D,
        kind: EventKind,
        points: &[InteractionPoint],
    ) -> usize {
        let root = page.root();
        let targeted: Vec<_> = points
            .iter()
            .map(|p| (p.position, p.identifier, root))
            .collect();

        if kind.shape() == EventShape::SinglePoint {
            self.marks
                .mark(Checkpoint::Sent, "send-touch-click-message-global", || {
                    json!({ "points": points_json(points.iter().map(|p| (p.position, p.identifier))) })
                });
        }

        let events = SyntheticEvent::from_points(kind, &targeted);
        let count = events.len();
        for event in events {
            page.dispatch_event(root, event);
        }
        count
    }

    /// Returns `(relayed, dropped)` message counts.
    fn relay_to_zone(
        &self,
        index: usize,
        kind: EventKind,
        points: &[InteractionPoint],
    ) -> (usize, usize) {
        let key = ZoneKey::Zone(index);
        let Some(zone) = self.zones.get(index) else {
            return (0, 0);
        };

        let local: Vec<(Point, Option<i32>)> = points
            .iter()
            .map(|p| (self.options.decoder.decode(zone.as_ref(), p.position), p.identifier))
            .collect();

        let mut relayed = 0;
        let mut dropped = 0;
        for mut message in RelayMessage::encode(kind, &local) {
            if self.marks.is_enabled() && self.options.timestamps {
                message = message.with_time(epoch_millis());
            }
            self.marks.mark(Checkpoint::Sent, "send-touch-relay-message", || {
                json!({ "zone": index, "event": message })
            });

            match post_to_zone(zone.as_ref(), key, &message) {
                Ok(()) => relayed += 1,
                Err(e) => {
                    error!(
                        zone = %key,
                        name = zone.name(),
                        kind = %kind,
                        error = %e,
                        "cannot relay event; message dropped"
                    );
                    dropped += 1;
                }
            }
        }
        (relayed, dropped)
    }
}

fn points_json(points: impl Iterator<Item = (Point, Option<i32>)>) -> serde_json::Value {
    points
        .map(|(p, id)| json!({ "clientX": p.x, "clientY": p.y, "identifier": id }))
        .collect()
}

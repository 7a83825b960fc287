//! Wire format of a relay message and its validation.
//!
//! ```json
//! { "eventName": "touchstart", "time": 1712.5,
//!   "touches": [{ "clientX": 50, "clientY": 60, "identifier": 0 }] }
//! { "eventName": "pointerdown", "clientX": 50, "clientY": 60, "pointerId": 1 }
//! ```

use serde::{Deserialize, Serialize};
use touchrelay_common::{Point, ProtocolError};

use crate::event::{EventKind, EventShape};

/// One touch inside a multi-point relay message, in zone-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchRecord {
    pub client_x: f64,
    pub client_y: f64,
    pub identifier: i32,
}

impl TouchRecord {
    pub fn position(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

/// The flat, boundary-safe message posted to a zone.
///
/// Deserialization is permissive: every field but `eventName` may be absent,
/// so messages with tags this version does not know still parse and can be
/// ignored rather than rejected. Use [`RelayMessage::decode`] to validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayMessage {
    pub event_name: String,
    /// Send timestamp in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touches: Option<Vec<TouchRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_id: Option<i32>,
}

/// Only the tag of an incoming payload; every other field is skipped unread.
#[derive(Deserialize)]
struct Tag {
    #[serde(rename = "eventName", default)]
    event_name: Option<String>,
}

/// A validated relay message.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    MultiPoint {
        kind: EventKind,
        time: Option<f64>,
        touches: Vec<TouchRecord>,
    },
    SinglePoint {
        kind: EventKind,
        time: Option<f64>,
        position: Point,
        pointer_id: Option<i32>,
    },
}

impl RelayEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            RelayEvent::MultiPoint { kind, .. } | RelayEvent::SinglePoint { kind, .. } => *kind,
        }
    }

    pub fn time(&self) -> Option<f64> {
        match self {
            RelayEvent::MultiPoint { time, .. } | RelayEvent::SinglePoint { time, .. } => *time,
        }
    }

    /// Every carried point with its identifier, in message order.
    pub fn points(&self) -> Vec<(Point, Option<i32>)> {
        match self {
            RelayEvent::MultiPoint { touches, .. } => touches
                .iter()
                .map(|t| (t.position(), Some(t.identifier)))
                .collect(),
            RelayEvent::SinglePoint {
                position,
                pointer_id,
                ..
            } => vec![(*position, *pointer_id)],
        }
    }
}

impl RelayMessage {
    /// A multi-point message carrying all `touches` at once.
    pub fn multi_point(kind: EventKind, touches: Vec<TouchRecord>) -> Self {
        Self {
            event_name: kind.as_str().to_string(),
            time: None,
            touches: Some(touches),
            client_x: None,
            client_y: None,
            pointer_id: None,
        }
    }

    /// A single-point message. `pointer_id` is omitted for clicks.
    pub fn single_point(kind: EventKind, position: Point, pointer_id: Option<i32>) -> Self {
        Self {
            event_name: kind.as_str().to_string(),
            time: None,
            touches: None,
            client_x: Some(position.x),
            client_y: Some(position.y),
            pointer_id,
        }
    }

    /// Build the messages for one zone bucket of already-translated points.
    ///
    /// Multi-point kinds yield one message for the whole bucket, or none when
    /// the bucket is empty. Single-point kinds yield one message per point.
    pub fn encode(kind: EventKind, points: &[(Point, Option<i32>)]) -> Vec<Self> {
        match kind.shape() {
            EventShape::MultiPoint if points.is_empty() => Vec::new(),
            EventShape::MultiPoint => {
                let touches = points
                    .iter()
                    .map(|(p, id)| TouchRecord {
                        client_x: p.x,
                        client_y: p.y,
                        identifier: id.unwrap_or(0),
                    })
                    .collect();
                vec![Self::multi_point(kind, touches)]
            }
            EventShape::SinglePoint => points
                .iter()
                .map(|(p, id)| Self::single_point(kind, *p, *id))
                .collect(),
        }
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// The event kind a serialized payload is tagged with.
    ///
    /// `None` when the payload is not JSON, has no string `eventName`, or
    /// carries a tag this version does not recognize. Such payloads are not
    /// relay traffic for this receiver and must be ignored, whatever the
    /// shape of their other fields.
    pub fn peek_kind(raw: &str) -> Option<EventKind> {
        serde_json::from_str::<Tag>(raw)
            .ok()?
            .event_name?
            .parse()
            .ok()
    }

    pub fn from_json(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }

    /// Validate the message.
    ///
    /// Returns `Ok(None)` for tags this version does not recognize; those are
    /// meant to be ignored without complaint.
    pub fn decode(&self) -> Result<Option<RelayEvent>, ProtocolError> {
        let Ok(kind) = self.event_name.parse::<EventKind>() else {
            return Ok(None);
        };

        let event = match kind.shape() {
            EventShape::MultiPoint => {
                let touches = self.touches.clone().ok_or(ProtocolError::MissingField {
                    event: kind.as_str(),
                    field: "touches",
                })?;
                if touches.is_empty() {
                    return Err(ProtocolError::EmptyTouchList(kind.as_str()));
                }
                RelayEvent::MultiPoint {
                    kind,
                    time: self.time,
                    touches,
                }
            }
            EventShape::SinglePoint => {
                let x = self.client_x.ok_or(ProtocolError::MissingField {
                    event: kind.as_str(),
                    field: "clientX",
                })?;
                let y = self.client_y.ok_or(ProtocolError::MissingField {
                    event: kind.as_str(),
                    field: "clientY",
                })?;
                RelayEvent::SinglePoint {
                    kind,
                    time: self.time,
                    position: Point::new(x, y),
                    pointer_id: self.pointer_id,
                }
            }
        };
        Ok(Some(event))
    }
}

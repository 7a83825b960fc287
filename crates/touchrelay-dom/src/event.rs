//! Native-shaped synthetic events.

use serde::Serialize;
use touchrelay_common::Point;
use touchrelay_protocol::{EventKind, EventShape};

use crate::document::ElementId;

/// A touch bound to the element it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticTouch {
    pub identifier: i32,
    pub client_x: f64,
    pub client_y: f64,
    pub target: ElementId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    Touch {
        touches: Vec<SyntheticTouch>,
        changed_touches: Vec<SyntheticTouch>,
    },
    Pointer {
        client_x: f64,
        client_y: f64,
        pointer_id: Option<i32>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticEvent {
    pub kind: EventKind,
    pub bubbles: bool,
    pub cancelable: bool,
    pub payload: EventPayload,
}

impl SyntheticEvent {
    /// A touch event whose touch list and changed-touch list are both
    /// `touches`. An empty list cannot form a touch event and yields `None`.
    pub fn touch(kind: EventKind, touches: Vec<SyntheticTouch>) -> Option<Self> {
        if touches.is_empty() || kind.shape() != EventShape::MultiPoint {
            return None;
        }
        Some(Self {
            kind,
            bubbles: true,
            cancelable: true,
            payload: EventPayload::Touch {
                changed_touches: touches.clone(),
                touches,
            },
        })
    }

    /// A click or pointer event at one position.
    pub fn pointer(kind: EventKind, position: Point, pointer_id: Option<i32>) -> Self {
        Self {
            kind,
            bubbles: true,
            cancelable: true,
            payload: EventPayload::Pointer {
                client_x: position.x,
                client_y: position.y,
                pointer_id,
            },
        }
    }

    /// Build the events for one batch of `(position, identifier, target)`
    /// triples: a single touch event for multi-point kinds, one event per
    /// point otherwise.
    pub fn from_points(kind: EventKind, points: &[(Point, Option<i32>, ElementId)]) -> Vec<Self> {
        match kind.shape() {
            EventShape::MultiPoint => {
                let touches = points
                    .iter()
                    .map(|(p, id, target)| SyntheticTouch {
                        identifier: id.unwrap_or(0),
                        client_x: p.x,
                        client_y: p.y,
                        target: *target,
                    })
                    .collect();
                Self::touch(kind, touches).into_iter().collect()
            }
            EventShape::SinglePoint => points
                .iter()
                .map(|(p, id, _)| Self::pointer(kind, *p, *id))
                .collect(),
        }
    }

    /// Identifiers carried by the event, in order.
    pub fn identifiers(&self) -> Vec<Option<i32>> {
        match &self.payload {
            EventPayload::Touch { touches, .. } => {
                touches.iter().map(|t| Some(t.identifier)).collect()
            }
            EventPayload::Pointer { pointer_id, .. } => vec![*pointer_id],
        }
    }
}

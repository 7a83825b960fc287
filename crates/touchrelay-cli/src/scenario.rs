//! Replay scenario files.
//!
//! ```json
//! {
//!   "viewport": { "x": 0, "y": 0, "width": 800, "height": 600 },
//!   "zones": [
//!     { "name": "map", "rect": { "x": 100, "y": 100, "width": 300, "height": 300 },
//!       "elements": [{ "dom_id": "pin", "rect": { "x": 0, "y": 0, "width": 40, "height": 40 } }] }
//!   ],
//!   "inputs": [
//!     { "type": "touch", "kind": "touchstart", "points": [{ "id": 0, "x": 150, "y": 160 }] },
//!     { "type": "wait", "ms": 1000 }
//!   ]
//! }
//! ```

use serde::Deserialize;
use touchrelay_common::{InteractionPoint, Rect};
use touchrelay_dom::ElementSpec;
use touchrelay_host::RawInput;
use touchrelay_protocol::EventKind;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: Rect,
    #[serde(default)]
    pub host_elements: Vec<ElementSpec>,
    #[serde(default)]
    pub zones: Vec<ZoneSpec>,
    #[serde(default)]
    pub inputs: Vec<InputStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneSpec {
    pub name: String,
    /// Bounds on the host page.
    pub rect: Rect,
    /// Whether the frame has a context to receive messages.
    #[serde(default = "default_loaded")]
    pub loaded: bool,
    /// Content of the zone's document, in zone-local coordinates.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

fn default_loaded() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputStep {
    Touch {
        kind: EventKind,
        points: Vec<TouchPoint>,
    },
    Click {
        x: f64,
        y: f64,
    },
    Pointer {
        kind: EventKind,
        id: i32,
        x: f64,
        y: f64,
    },
    /// Move a zone on the host page.
    MoveZone {
        zone: usize,
        rect: Rect,
    },
    /// Let time pass so debug markers can expire.
    Wait {
        ms: u64,
    },
}

impl InputStep {
    /// The raw overlay input for this step, if it is one.
    pub fn raw_input(&self) -> Option<RawInput> {
        match self {
            InputStep::Touch { kind, points } => Some(RawInput::touches(
                *kind,
                points
                    .iter()
                    .map(|p| InteractionPoint::touch(p.id, p.x, p.y))
                    .collect(),
            )),
            InputStep::Click { x, y } => Some(RawInput::click(*x, *y)),
            InputStep::Pointer { kind, id, x, y } => Some(RawInput::pointer(*kind, *id, *x, *y)),
            InputStep::MoveZone { .. } | InputStep::Wait { .. } => None,
        }
    }
}

impl Scenario {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

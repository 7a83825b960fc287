//! Event kinds understood by both ends of the relay.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload shape of an event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    /// A list of touches, sent as one message per zone.
    MultiPoint,
    /// One coordinate pair, sent as one message per point.
    SinglePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    PointerDown,
    PointerUp,
    Click,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::TouchStart,
        EventKind::TouchMove,
        EventKind::TouchEnd,
        EventKind::TouchCancel,
        EventKind::PointerDown,
        EventKind::PointerUp,
        EventKind::Click,
    ];

    /// The DOM event name, which is also the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchCancel => "touchcancel",
            EventKind::PointerDown => "pointerdown",
            EventKind::PointerUp => "pointerup",
            EventKind::Click => "click",
        }
    }

    pub fn shape(&self) -> EventShape {
        match self {
            EventKind::TouchStart
            | EventKind::TouchMove
            | EventKind::TouchEnd
            | EventKind::TouchCancel => EventShape::MultiPoint,
            EventKind::PointerDown | EventKind::PointerUp | EventKind::Click => {
                EventShape::SinglePoint
            }
        }
    }

    /// Whether the host swallows the native default action after relaying.
    ///
    /// End and cancel are left alone so native gesture teardown still runs.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, EventKind::TouchEnd | EventKind::TouchCancel)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind '{0}'")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

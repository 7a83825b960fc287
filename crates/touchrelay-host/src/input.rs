use touchrelay_common::InteractionPoint;
use touchrelay_protocol::{EventKind, EventShape};

use crate::dispatch::DispatchSummary;

/// A raw event captured on the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// A touch event; `changed` holds the touches that changed.
    Touches {
        kind: EventKind,
        changed: Vec<InteractionPoint>,
    },
    /// A click or pointer event.
    Single {
        kind: EventKind,
        point: InteractionPoint,
    },
}

impl RawInput {
    pub fn touches(kind: EventKind, changed: Vec<InteractionPoint>) -> Self {
        RawInput::Touches { kind, changed }
    }

    pub fn click(x: f64, y: f64) -> Self {
        RawInput::Single {
            kind: EventKind::Click,
            point: InteractionPoint::click(x, y),
        }
    }

    pub fn pointer(kind: EventKind, pointer_id: i32, x: f64, y: f64) -> Self {
        RawInput::Single {
            kind,
            point: InteractionPoint::touch(pointer_id, x, y),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            RawInput::Touches { kind, .. } | RawInput::Single { kind, .. } => *kind,
        }
    }

    /// Whether the variant matches the payload shape of its kind.
    pub fn is_well_formed(&self) -> bool {
        match self {
            RawInput::Touches { kind, .. } => kind.shape() == EventShape::MultiPoint,
            RawInput::Single { kind, .. } => kind.shape() == EventShape::SinglePoint,
        }
    }
}

/// Outcome of handing a raw event to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The relay is not attached, or does not intercept this kind.
    Ignored,
    Relayed {
        /// Whether the caller should cancel the native default action.
        prevent_default: bool,
        summary: DispatchSummary,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_right_shape() {
        assert!(RawInput::click(1.0, 2.0).is_well_formed());
        assert!(RawInput::pointer(EventKind::PointerDown, 1, 1.0, 2.0).is_well_formed());
        assert!(RawInput::touches(EventKind::TouchMove, Vec::new()).is_well_formed());
    }

    #[test]
    fn mismatched_shape_is_detected() {
        let raw = RawInput::touches(EventKind::Click, vec![InteractionPoint::click(0.0, 0.0)]);
        assert!(!raw.is_well_formed());
        let raw = RawInput::Single {
            kind: EventKind::TouchStart,
            point: InteractionPoint::touch(0, 0.0, 0.0),
        };
        assert!(!raw.is_well_formed());
    }

    #[test]
    fn click_has_no_identifier() {
        match RawInput::click(3.0, 4.0) {
            RawInput::Single { kind, point } => {
                assert_eq!(kind, EventKind::Click);
                assert_eq!(point.identifier, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

use std::collections::BTreeSet;

use touchrelay_dom::{Document, ElementId, ElementSpec};
use touchrelay_protocol::EventKind;

/// Event kinds the overlay listens for.
pub const INTERCEPTED_KINDS: [EventKind; 7] = [
    EventKind::TouchStart,
    EventKind::TouchEnd,
    EventKind::TouchCancel,
    EventKind::TouchMove,
    EventKind::Click,
    EventKind::PointerDown,
    EventKind::PointerUp,
];

/// The full-viewport capture layer placed above page content.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    element: ElementId,
    listening: BTreeSet<EventKind>,
}

impl Overlay {
    /// Insert the overlay as the body's first child and start listening.
    pub(crate) fn install<D: Document>(page: &mut D, dom_id: &str, z_index: i32) -> Self {
        let spec = ElementSpec::new(page.viewport())
            .with_id(dom_id)
            .with_z_index(z_index);
        let element = page.insert_first(spec);
        Self {
            element,
            listening: INTERCEPTED_KINDS.into_iter().collect(),
        }
    }

    /// Stop listening and take the overlay off the page.
    pub(crate) fn remove<D: Document>(mut self, page: &mut D) {
        self.listening.clear();
        page.remove(self.element);
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.listening.contains(&kind)
    }
}

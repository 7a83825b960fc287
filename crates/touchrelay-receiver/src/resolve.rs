use touchrelay_common::Point;
use touchrelay_dom::{Document, ElementId};

/// Pick the element a relayed point should be dispatched on.
///
/// The topmost hit-test candidate that does not carry `marker_class` wins.
/// With no such candidate the document root is used.
pub fn resolve_target<D: Document + ?Sized>(doc: &D, point: Point, marker_class: &str) -> ElementId {
    doc.elements_from_point(point)
        .into_iter()
        .find(|el| !doc.has_class(*el, marker_class))
        .unwrap_or_else(|| doc.root())
}

//! In-memory document: a viewport with a flat list of positioned boxes.

use std::collections::HashMap;

use serde::Serialize;
use touchrelay_common::{Point, Rect};
use tracing::trace;

use crate::document::{Document, ElementId, ElementSpec};
use crate::event::SyntheticEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub spec: ElementSpec,
}

/// An event delivered to a scene element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchRecord {
    pub target: ElementId,
    pub target_dom_id: Option<String>,
    pub event: SyntheticEvent,
}

/// A document whose body holds fixed-position boxes.
///
/// Hit-testing orders candidates by z-index, then by paint order (later
/// children on top). The root matches any point inside the viewport and is
/// always the last candidate.
#[derive(Debug, Clone)]
pub struct Scene {
    viewport: Rect,
    elements: HashMap<ElementId, SceneElement>,
    children: Vec<ElementId>,
    next_id: u64,
    dispatched: Vec<DispatchRecord>,
}

impl Scene {
    pub const ROOT: ElementId = ElementId(0);

    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            elements: HashMap::new(),
            children: Vec::new(),
            next_id: 1,
            dispatched: Vec::new(),
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.get(&id)
    }

    /// Body children in paint order.
    pub fn children(&self) -> impl Iterator<Item = &SceneElement> {
        self.children.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn count_with_class(&self, class: &str) -> usize {
        self.children()
            .filter(|el| el.spec.classes.iter().any(|c| c == class))
            .count()
    }

    pub fn dispatched(&self) -> &[DispatchRecord] {
        &self.dispatched
    }

    pub fn take_dispatched(&mut self) -> Vec<DispatchRecord> {
        std::mem::take(&mut self.dispatched)
    }

    fn insert(&mut self, spec: ElementSpec, first: bool) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, SceneElement { id, spec });
        if first {
            self.children.insert(0, id);
        } else {
            self.children.push(id);
        }
        id
    }
}

impl Document for Scene {
    fn root(&self) -> ElementId {
        Self::ROOT
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn elements_from_point(&self, point: Point) -> Vec<ElementId> {
        let mut hits: Vec<(usize, &SceneElement)> = self
            .children
            .iter()
            .enumerate()
            .filter_map(|(order, id)| self.elements.get(id).map(|el| (order, el)))
            .filter(|(_, el)| el.spec.rect.is_some_and(|r| r.contains(point)))
            .collect();
        hits.sort_by(|(a_order, a), (b_order, b)| {
            b.spec
                .z_index
                .cmp(&a.spec.z_index)
                .then(b_order.cmp(a_order))
        });

        let mut out: Vec<ElementId> = hits.into_iter().map(|(_, el)| el.id).collect();
        if self.viewport.contains(point) {
            out.push(Self::ROOT);
        }
        out
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|el| el.spec.classes.iter().any(|c| c == class))
    }

    fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.children()
            .find(|el| el.spec.dom_id.as_deref() == Some(dom_id))
            .map(|el| el.id)
    }

    fn insert_first(&mut self, spec: ElementSpec) -> ElementId {
        self.insert(spec, true)
    }

    fn append(&mut self, spec: ElementSpec) -> ElementId {
        self.insert(spec, false)
    }

    fn remove(&mut self, element: ElementId) -> bool {
        if self.elements.remove(&element).is_none() {
            return false;
        }
        self.children.retain(|id| *id != element);
        true
    }

    fn contains(&self, element: ElementId) -> bool {
        element == Self::ROOT || self.elements.contains_key(&element)
    }

    fn dispatch_event(&mut self, target: ElementId, event: SyntheticEvent) {
        let target_dom_id = self
            .elements
            .get(&target)
            .and_then(|el| el.spec.dom_id.clone());
        trace!(%target, kind = %event.kind, "scene dispatch");
        self.dispatched.push(DispatchRecord {
            target,
            target_dom_id,
            event,
        });
    }
}

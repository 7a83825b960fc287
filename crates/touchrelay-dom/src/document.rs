use serde::{Deserialize, Serialize};
use std::fmt;
use touchrelay_common::{Color, Point, Rect};

use crate::event::SyntheticEvent;

/// Opaque handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element-{}", self.0)
    }
}

/// Description of an element to insert: a fixed-position box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub dom_id: Option<String>,
    pub classes: Vec<String>,
    pub rect: Option<Rect>,
    pub z_index: i32,
    pub background: Option<Color>,
    pub rounded: bool,
}

impl ElementSpec {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Some(rect),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn rounded(mut self) -> Self {
        self.rounded = true;
        self
    }
}

/// The page a relay context operates on.
pub trait Document {
    /// The document root, used as a fallback event target.
    fn root(&self) -> ElementId;

    /// Visible viewport in the document's own client coordinates.
    fn viewport(&self) -> Rect;

    /// Elements under `point`, topmost first.
    fn elements_from_point(&self, point: Point) -> Vec<ElementId>;

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn element_by_id(&self, dom_id: &str) -> Option<ElementId>;

    /// Insert as the first child of the body.
    fn insert_first(&mut self, spec: ElementSpec) -> ElementId;

    /// Append as the last child of the body.
    fn append(&mut self, spec: ElementSpec) -> ElementId;

    /// Remove an element. Returns false if it was not attached.
    fn remove(&mut self, element: ElementId) -> bool;

    fn contains(&self, element: ElementId) -> bool;

    fn dispatch_event(&mut self, target: ElementId, event: SyntheticEvent);
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in CSS pixels, relative to some viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An on-screen bounding box, as returned by a client-rect query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Open-interval containment: a point lying exactly on an edge is outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        self.left() < p.x && p.x < self.right() && self.top() < p.y && p.y < self.bottom()
    }

    /// Closed-interval containment, used for hit-testing document elements.
    pub fn contains(&self, p: Point) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.top() <= p.y && p.y <= self.bottom()
    }
}

/// Bucket key for a partitioned event: either the host document itself or
/// the zone at a given position in the registry.
///
/// On the wire and in logs the host bucket is written as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ZoneKey {
    Host,
    Zone(usize),
}

impl From<ZoneKey> for i64 {
    fn from(key: ZoneKey) -> Self {
        match key {
            ZoneKey::Host => -1,
            ZoneKey::Zone(i) => i as i64,
        }
    }
}

impl TryFrom<i64> for ZoneKey {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(ZoneKey::Host),
            v if v >= 0 => Ok(ZoneKey::Zone(v as usize)),
            v => Err(format!("invalid zone key {v}")),
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

/// Anything that sits at a global position and can be partitioned by zone.
pub trait Located {
    fn position(&self) -> Point;
}

/// One logical contact: a touch, a pointer, or a click.
///
/// `identifier` is the touch or pointer id; clicks carry none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionPoint {
    pub identifier: Option<i32>,
    pub position: Point,
}

impl InteractionPoint {
    pub fn touch(identifier: i32, x: f64, y: f64) -> Self {
        Self {
            identifier: Some(identifier),
            position: Point::new(x, y),
        }
    }

    pub fn click(x: f64, y: f64) -> Self {
        Self {
            identifier: None,
            position: Point::new(x, y),
        }
    }
}

impl Located for InteractionPoint {
    fn position(&self) -> Point {
        self.position
    }
}

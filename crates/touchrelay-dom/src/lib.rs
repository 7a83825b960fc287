//! Document collaborator for the relay.
//!
//! The relay never touches a real DOM directly. Both contexts talk to their
//! page through the [`Document`] trait: hit-testing, inserting and removing
//! elements, and dispatching synthetic events. [`Scene`] is an in-memory
//! implementation used by tests and by the replay tool.

pub mod document;
pub mod event;
pub mod scene;

pub use document::{Document, ElementId, ElementSpec};
pub use event::{EventPayload, SyntheticEvent, SyntheticTouch};
pub use scene::{DispatchRecord, Scene, SceneElement};

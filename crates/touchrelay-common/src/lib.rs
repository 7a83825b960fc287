//! Shared vocabulary for the touch relay: geometry, interaction points,
//! zone keys, marker colors and the error taxonomy.

pub mod errors;
pub mod types;

pub use errors::{ConfigError, ProtocolError, RelayError};
pub use types::{Color, InteractionPoint, Located, Point, Rect, ZoneKey};

pub type Result<T> = std::result::Result<T, RelayError>;

//! Waypoint type, ordered store, and id allocation.

pub mod ids;
pub mod store;

pub use ids::{IdSource, SequentialIds, TimestampIds};
pub use store::WaypointStore;

use crate::core::WorldPoint;
use serde::{Deserialize, Serialize};

/// Default marker color for new waypoints
pub const DEFAULT_COLOR: &str = "#ff0000";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A named, colored point of interest in world space.
///
/// The id is assigned at creation and stays stable for the waypoint's
/// lifetime; uniqueness across the live collection is enforced by
/// [`WaypointStore`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique, stable identifier
    pub id: u64,
    /// User-editable display name
    #[serde(default)]
    pub name: String,
    /// World X in meters
    pub x: f64,
    /// World Y in meters
    pub y: f64,
    /// Marker color as `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
}

impl Waypoint {
    /// Create a waypoint with the default color
    pub fn new(id: u64, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            color: default_color(),
        }
    }

    /// Position in world space
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

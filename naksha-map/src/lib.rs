//! # Naksha-Map: Occupancy Grid Map Model for Waypoint Management
//!
//! Map-domain core for viewing a 2D occupancy grid and managing named
//! waypoints on it. The library covers the load pipeline (metadata text +
//! binary graymap image → map model), the bidirectional pixel↔world affine
//! transform, the waypoint collection with its consistency rules, and the
//! waypoint export/import document.
//!
//! ## Coordinate Frames
//!
//! - **World space**: metric frame in meters, Y increasing upward. Waypoint
//!   positions live here.
//! - **Pixel space**: raster frame of the decoded grid, origin at the
//!   top-left, Y increasing downward. [`MapTransform`] maps between the two.
//!
//! The view-space frame (zoom/pan on top of pixel space) belongs to the
//! viewer shell, not to this crate.
//!
//! ## Modules
//!
//! - [`core`]: point types for the two coordinate frames
//! - [`map`]: metadata parser, grid decoder, combined map model
//! - [`transform`]: pixel↔world affine mapping
//! - [`waypoint`]: waypoint type, ordered store, id allocation
//! - [`io`]: waypoint JSON export/import
//!
//! ## Data Flow
//!
//! ```text
//!   map description text ──► MapMetadata ─┐
//!                                         ├──► MapModel ──► MapTransform
//!   binary graymap bytes ──► OccupancyGrid┘
//!
//!   MapTransform + pointer gestures ──► WaypointStore ──► WaypointDocument
//! ```

pub mod core;
pub mod error;
pub mod io;
pub mod map;
pub mod transform;
pub mod waypoint;

// Re-export main types at crate root
pub use error::{Error, Result};
pub use map::{MapMetadata, MapModel, Occupancy, OccupancyGrid, Origin};
pub use transform::MapTransform;
pub use waypoint::{IdSource, SequentialIds, TimestampIds, Waypoint, WaypointStore};

//! Map model: metadata parsing, grid decoding, and the combined map object.

pub mod grid;
pub mod metadata;
pub mod model;

pub use grid::OccupancyGrid;
pub use metadata::{MapMetadata, Origin};
pub use model::{MapModel, Occupancy};

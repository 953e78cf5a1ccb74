//! Combined map object: metadata plus decoded grid.

use crate::core::WorldPoint;
use crate::map::{MapMetadata, OccupancyGrid};
use crate::transform::MapTransform;

/// Default threshold above which a cell counts as occupied
const DEFAULT_OCCUPIED_THRESH: f64 = 0.65;
/// Default threshold below which a cell counts as free
const DEFAULT_FREE_THRESH: f64 = 0.196;

/// Point occupancy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// Point is in navigable free space
    Free,
    /// Point is on or inside an obstacle
    Occupied,
    /// Point is outside the grid or between the thresholds
    Unknown,
}

/// An immutable-per-load map: one [`MapMetadata`] plus one [`OccupancyGrid`].
///
/// Constructed only when both parses succeeded (a tagged placeholder grid
/// counts as a deliberate degrade, not a partial load). A partially loaded
/// state lives outside this type, in the session layer.
#[derive(Clone, Debug)]
pub struct MapModel {
    metadata: MapMetadata,
    grid: OccupancyGrid,
}

impl MapModel {
    /// Combine parsed metadata with a decoded grid
    pub fn new(metadata: MapMetadata, grid: OccupancyGrid) -> Self {
        Self { metadata, grid }
    }

    /// Map description record
    #[inline]
    pub fn metadata(&self) -> &MapMetadata {
        &self.metadata
    }

    /// Decoded grid raster
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Pixel↔world transform for this map
    #[inline]
    pub fn transform(&self) -> MapTransform {
        MapTransform::new(&self.metadata, &self.grid)
    }

    /// Classify the occupancy of a world point.
    ///
    /// Uses the map_server convention: darker pixels are more occupied,
    /// inverted when `negate` is set. Points outside the grid are Unknown.
    pub fn occupancy(&self, point: WorldPoint) -> Occupancy {
        let pixel = self.transform().world_to_pixel(point);
        if pixel.x < 0.0 || pixel.y < 0.0 {
            return Occupancy::Unknown;
        }
        let (px, py) = (pixel.x.floor() as u32, pixel.y.floor() as u32);
        let Some(value) = self.grid.pixel(px, py) else {
            return Occupancy::Unknown;
        };

        let p = if self.metadata.negate != 0 {
            value as f64 / 255.0
        } else {
            (255.0 - value as f64) / 255.0
        };

        let occupied = self.metadata.occupied_thresh.unwrap_or(DEFAULT_OCCUPIED_THRESH);
        let free = self.metadata.free_thresh.unwrap_or(DEFAULT_FREE_THRESH);
        if p > occupied {
            Occupancy::Occupied
        } else if p < free {
            Occupancy::Free
        } else {
            Occupancy::Unknown
        }
    }
}

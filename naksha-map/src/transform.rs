//! Bidirectional affine mapping between pixel space and world space.
//!
//! Pixel row 0 is the top of the image while world Y increases upward, so
//! the Y axis is flipped through the grid height. View zoom/pan is applied
//! separately by the viewer and is never baked into this transform.
//!
//! # Known limitation
//!
//! A `theta` component in the map origin is parsed and preserved but NOT
//! applied as a rotation here; the transform is translation+scale only.

use crate::core::{PixelPoint, WorldPoint};
use crate::map::{MapMetadata, OccupancyGrid};

/// Pure pixel↔world transform, parameterized by a loaded map.
#[derive(Clone, Copy, Debug)]
pub struct MapTransform {
    origin_x: f64,
    origin_y: f64,
    resolution: f64,
    grid_height: f64,
}

impl MapTransform {
    /// Build the transform for a metadata/grid pair
    pub fn new(metadata: &MapMetadata, grid: &OccupancyGrid) -> Self {
        Self {
            origin_x: metadata.origin.x,
            origin_y: metadata.origin.y,
            resolution: metadata.resolution,
            grid_height: grid.height() as f64,
        }
    }

    /// Map a pixel-space point to world coordinates
    #[inline]
    pub fn pixel_to_world(&self, pixel: PixelPoint) -> WorldPoint {
        WorldPoint::new(
            self.origin_x + pixel.x * self.resolution,
            self.origin_y + (self.grid_height - pixel.y) * self.resolution,
        )
    }

    /// Map a world point to pixel-space coordinates
    #[inline]
    pub fn world_to_pixel(&self, world: WorldPoint) -> PixelPoint {
        PixelPoint::new(
            (world.x - self.origin_x) / self.resolution,
            self.grid_height - (world.y - self.origin_y) / self.resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::metadata::Origin;
    use std::collections::BTreeMap;

    fn test_transform() -> MapTransform {
        let metadata = MapMetadata {
            resolution: 0.05,
            origin: Origin::new(-10.0, -10.0),
            negate: 0,
            occupied_thresh: None,
            free_thresh: None,
            image: None,
            extras: BTreeMap::new(),
        };
        let grid = OccupancyGrid::placeholder(800, 600);
        MapTransform::new(&metadata, &grid)
    }

    #[test]
    fn test_pixel_to_world_known_values() {
        let t = test_transform();
        // Top-left pixel: x at origin, y at origin + height * resolution
        let w = t.pixel_to_world(PixelPoint::new(0.0, 0.0));
        assert!((w.x - -10.0).abs() < 1e-9);
        assert!((w.y - 20.0).abs() < 1e-9);
        // Bottom-left pixel row (y = height) is the world origin
        let w = t.pixel_to_world(PixelPoint::new(0.0, 600.0));
        assert!((w.y - -10.0).abs() < 1e-9);
    }

    #[test]
    fn test_world_to_pixel_known_values() {
        let t = test_transform();
        let p = t.world_to_pixel(WorldPoint::new(-10.0, 20.0));
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        let p = t.world_to_pixel(WorldPoint::new(0.0, 0.0));
        assert!((p.x - 200.0).abs() < 1e-9);
        assert!((p.y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_identity() {
        let t = test_transform();
        for &(px, py) in &[
            (0.0, 0.0),
            (800.0, 600.0),
            (123.456, 78.9),
            (0.001, 599.999),
            (400.0, 300.0),
        ] {
            let p = PixelPoint::new(px, py);
            let back = t.world_to_pixel(t.pixel_to_world(p));
            assert!((back.x - px).abs() < 1e-6, "x: {} vs {}", back.x, px);
            assert!((back.y - py).abs() < 1e-6, "y: {} vs {}", back.y, py);
        }
    }

    #[test]
    fn test_round_trip_from_world() {
        let t = test_transform();
        let w = WorldPoint::new(-3.21, 7.65);
        let back = t.pixel_to_world(t.world_to_pixel(w));
        assert!((back.x - w.x).abs() < 1e-9);
        assert!((back.y - w.y).abs() < 1e-9);
    }
}

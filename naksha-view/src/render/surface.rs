//! Drawing surface abstraction.
//!
//! The render engine never touches an ambient graphics context; every draw
//! call goes through an explicit surface handle supplied per render. All
//! coordinates passed to a surface are in map pixel space; the surface
//! applies the composed view transform opened by [`DrawSurface::begin_view`].

use crate::error::Result;
use naksha_map::core::PixelPoint;
use naksha_map::OccupancyGrid;

/// A surface the render engine draws onto.
pub trait DrawSurface {
    /// Reset to a blank surface of the given pixel dimensions
    fn clear(&mut self, width: u32, height: u32);

    /// Open the composed view transform: scale, then translate
    fn begin_view(&mut self, scale: f64, offset: (f64, f64));

    /// Draw the grid raster with its top-left corner at the pixel origin
    fn draw_grid(&mut self, grid: &OccupancyGrid) -> Result<()>;

    /// Draw a filled circle with an outline
    fn fill_circle(
        &mut self,
        center: PixelPoint,
        radius: f64,
        fill: &str,
        outline: &str,
        outline_width: f64,
    );

    /// Draw a text label anchored at its baseline start
    fn draw_label(&mut self, pos: PixelPoint, text: &str, color: &str, font_px: f64);

    /// Close the view transform opened by [`DrawSurface::begin_view`]
    fn end_view(&mut self);
}

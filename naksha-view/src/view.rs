//! View state: zoom scale and pan offset on top of pixel space.
//!
//! Pointer events arrive in view (screen) space; the grid and markers live
//! in pixel space. The mapping is `map = screen / scale - offset`, the
//! same composition the render engine applies when drawing.

use naksha_map::core::PixelPoint;

/// A point in view space, where pointer events are captured.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenPoint {
    /// X in screen pixels
    pub x: f64,
    /// Y in screen pixels
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Current zoom/pan of the canvas. Mutated only by explicit zoom and pan
/// operations; never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ViewState {
    /// Identity view: scale 1, no offset
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Current zoom scale (always positive)
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in map pixels
    #[inline]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Zoom in by the given step factor
    pub fn zoom_in(&mut self, step: f64) {
        self.scale *= step;
    }

    /// Zoom out by the given step factor
    pub fn zoom_out(&mut self, step: f64) {
        self.scale /= step;
    }

    /// Pan by the given delta in map pixels
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Restore the identity view
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Map a screen point back to map pixel space
    #[inline]
    pub fn screen_to_map(&self, point: ScreenPoint) -> PixelPoint {
        PixelPoint::new(
            point.x / self.scale - self.offset_x,
            point.y / self.scale - self.offset_y,
        )
    }

    /// Map a map-pixel point into screen space
    #[inline]
    pub fn map_to_screen(&self, point: PixelPoint) -> ScreenPoint {
        ScreenPoint::new(
            (point.x + self.offset_x) * self.scale,
            (point.y + self.offset_y) * self.scale,
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

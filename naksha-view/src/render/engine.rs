//! Render engine implementation.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::render::DrawSurface;
use crate::view::ViewState;
use naksha_map::core::PixelPoint;
use naksha_map::{MapModel, WaypointStore};

/// Label offset from the marker center, in screen pixels
const LABEL_OFFSET_X: f64 = 12.0;
const LABEL_OFFSET_Y: f64 = -8.0;

/// Draws the decoded grid and waypoint markers onto a surface.
///
/// Holds no mutable state; the output is a pure function of the map model,
/// view state and waypoint collection supplied per call. Marker radius,
/// outline and label sizes are pre-divided by the view scale inside the
/// composed transform so they stay visually constant across zoom levels.
pub struct RenderEngine {
    config: RenderConfig,
}

impl RenderEngine {
    /// Create an engine with the given marker/label configuration
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render one frame onto the surface
    pub fn render<S: DrawSurface>(
        &self,
        model: &MapModel,
        view: &ViewState,
        waypoints: &WaypointStore,
        surface: &mut S,
    ) -> Result<()> {
        let grid = model.grid();
        surface.clear(grid.width(), grid.height());
        surface.begin_view(view.scale(), view.offset());
        surface.draw_grid(grid)?;

        let transform = model.transform();
        let scale = view.scale();
        for wp in waypoints.iter() {
            let center = transform.world_to_pixel(wp.position());
            surface.fill_circle(
                center,
                self.config.marker_radius_px / scale,
                &wp.color,
                &self.config.outline_color,
                self.config.outline_width_px / scale,
            );
            surface.draw_label(
                PixelPoint::new(
                    center.x + LABEL_OFFSET_X / scale,
                    center.y + LABEL_OFFSET_Y / scale,
                ),
                &wp.name,
                &self.config.label_color,
                self.config.label_font_px / scale,
            );
        }

        surface.end_view();
        Ok(())
    }
}

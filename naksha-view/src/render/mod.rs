//! Render engine: grid raster plus waypoint markers on a drawing surface.

pub mod engine;
pub mod surface;
pub mod svg;

pub use engine::RenderEngine;
pub use surface::DrawSurface;
pub use svg::SvgSurface;

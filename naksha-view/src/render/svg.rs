//! SVG drawing surface.
//!
//! Builds an SVG document with the decoded grid embedded as a base64 PNG
//! data URI and markers/labels as vector elements. Output is a pure
//! function of the draw calls, so identical inputs yield identical
//! documents.

use crate::error::{Error, Result};
use crate::render::DrawSurface;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use naksha_map::core::PixelPoint;
use naksha_map::OccupancyGrid;
use svg::node::element::{Circle, Group, Image, Text};
use svg::Document;

/// SVG-backed drawing surface.
pub struct SvgSurface {
    document: Document,
    /// View transform group being populated between begin_view/end_view
    group: Option<Group>,
}

impl SvgSurface {
    /// Create a surface; dimensions are set by the first `clear`
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            group: None,
        }
    }

    /// Finish and serialize the document
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }

    fn push(&mut self, node: impl svg::Node) {
        match self.group.take() {
            Some(group) => self.group = Some(group.add(node)),
            None => {
                let document = std::mem::replace(&mut self.document, Document::new());
                self.document = document.add(node);
            }
        }
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for SvgSurface {
    fn clear(&mut self, width: u32, height: u32) {
        self.document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));
        self.group = None;
    }

    fn begin_view(&mut self, scale: f64, offset: (f64, f64)) {
        self.group = Some(Group::new().set(
            "transform",
            format!("scale({scale}) translate({} {})", offset.0, offset.1),
        ));
    }

    fn draw_grid(&mut self, grid: &OccupancyGrid) -> Result<()> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                grid.pixels(),
                grid.width(),
                grid.height(),
                ExtendedColorType::L8,
            )
            .map_err(|e| Error::Render(format!("PNG encode failed: {e}")))?;

        let image = Image::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", grid.width())
            .set("height", grid.height())
            .set("image-rendering", "pixelated")
            .set("href", format!("data:image/png;base64,{}", BASE64.encode(&png)));
        self.push(image);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: PixelPoint,
        radius: f64,
        fill: &str,
        outline: &str,
        outline_width: f64,
    ) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("fill", fill)
            .set("stroke", outline)
            .set("stroke-width", outline_width);
        self.push(circle);
    }

    fn draw_label(&mut self, pos: PixelPoint, text: &str, color: &str, font_px: f64) {
        let label = Text::new(text)
            .set("x", pos.x)
            .set("y", pos.y)
            .set("fill", color)
            .set("font-size", font_px)
            .set("font-family", "sans-serif");
        self.push(label);
    }

    fn end_view(&mut self) {
        if let Some(group) = self.group.take() {
            let document = std::mem::replace(&mut self.document, Document::new());
            self.document = document.add(group);
        }
    }
}

//! Binary graymap (P5) decoder and synthetic placeholder grids.
//!
//! Format: magic token `P5`, then width, height and max-value as
//! whitespace-separated ASCII tokens; one whitespace byte after the
//! max-value token terminates the header, and `width * height` raw bytes
//! follow, one per pixel (0 = black/occupied .. max = white/free).

use crate::error::{Error, Result};

/// Pixel width of the fallback grid used when decoding fails
pub const PLACEHOLDER_WIDTH: u32 = 800;
/// Pixel height of the fallback grid used when decoding fails
pub const PLACEHOLDER_HEIGHT: u32 = 600;
/// Border thickness of the fallback grid in pixels
const PLACEHOLDER_BORDER: u32 = 8;

/// Decoded occupancy grid raster.
///
/// One byte per cell, row-major from the top-left corner. Immutable once
/// decoded; the buffer length is always exactly `width * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    synthetic: bool,
}

impl OccupancyGrid {
    /// Decode a P5 binary graymap buffer.
    ///
    /// Fails if the four header tokens cannot be located before the buffer
    /// ends, if the magic is not `P5`, if the declared dimensions are
    /// non-positive, or if fewer than `width * height` pixel bytes remain
    /// after the header.
    pub fn decode_pgm(data: &[u8]) -> Result<Self> {
        let mut tokens: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut data_start = None;

        for (pos, &byte) in data.iter().enumerate() {
            if byte.is_ascii_whitespace() {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                if tokens.len() == 4 {
                    // The whitespace byte after the max-value token ends
                    // the header; pixel data starts at the next byte.
                    data_start = Some(pos + 1);
                    break;
                }
            } else {
                current.push(byte as char);
            }
        }

        let data_start = data_start
            .ok_or_else(|| Error::GridDecode("header not found before end of buffer".into()))?;

        if tokens[0] != "P5" {
            return Err(Error::GridDecode(format!(
                "unsupported magic {:?}, expected \"P5\"",
                tokens[0]
            )));
        }

        let width = parse_dimension("width", &tokens[1])?;
        let height = parse_dimension("height", &tokens[2])?;
        let max_value = tokens[3]
            .parse::<u32>()
            .map_err(|_| Error::GridDecode(format!("invalid max value: {:?}", tokens[3])))?;
        if max_value == 0 || max_value > 255 {
            return Err(Error::GridDecode(format!(
                "max value must be in 1..=255, got {max_value}"
            )));
        }

        let pixel_count = width as usize * height as usize;
        let remaining = data.len().saturating_sub(data_start);
        if remaining < pixel_count {
            return Err(Error::GridDecode(format!(
                "insufficient pixel data: need {pixel_count} bytes, have {remaining}"
            )));
        }

        Ok(Self {
            width,
            height,
            pixels: data[data_start..data_start + pixel_count].to_vec(),
            synthetic: false,
        })
    }

    /// Deterministic fallback grid: free interior with an 8-pixel
    /// occupied border. Tagged `synthetic` so it is never mistaken for a
    /// real decode.
    pub fn placeholder(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut pixels = vec![255u8; width as usize * height as usize];
        for y in 0..height {
            for x in 0..width {
                let border = x < PLACEHOLDER_BORDER
                    || y < PLACEHOLDER_BORDER
                    || x >= width.saturating_sub(PLACEHOLDER_BORDER)
                    || y >= height.saturating_sub(PLACEHOLDER_BORDER);
                if border {
                    pixels[(y * width + x) as usize] = 0;
                }
            }
        }
        Self {
            width,
            height,
            pixels,
            synthetic: true,
        }
    }

    /// Grid width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel buffer, row-major from the top-left
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at (x, y), or None when out of bounds
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Whether this grid is a placeholder rather than a real decode
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

fn parse_dimension(name: &str, token: &str) -> Result<u32> {
    let value = token
        .parse::<i64>()
        .map_err(|_| Error::GridDecode(format!("invalid {name}: {token:?}")))?;
    if value <= 0 {
        return Err(Error::GridDecode(format!(
            "{name} must be positive, got {value}"
        )));
    }
    u32::try_from(value).map_err(|_| Error::GridDecode(format!("{name} too large: {value}")))
}

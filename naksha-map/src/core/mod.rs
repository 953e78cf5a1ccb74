//! Fundamental coordinate types.

pub mod point;

pub use point::{PixelPoint, WorldPoint};

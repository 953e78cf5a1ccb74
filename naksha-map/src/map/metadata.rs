//! Map description parser (ROS map_server YAML convention).
//!
//! The format is a small `key: value` subset of YAML. Recognized keys get
//! typed fields; everything else is retained verbatim in a string map so
//! unknown keys survive a parse/reserialize cycle without ever entering
//! the numeric transform path.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// World coordinates of the map origin (bottom-left pixel), plus optional yaw.
///
/// `theta` is accepted for forward compatibility but is NOT applied as a
/// rotation by [`crate::MapTransform`]; see the known limitation there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    /// World X of the origin in meters
    pub x: f64,
    /// World Y of the origin in meters
    pub y: f64,
    /// Yaw in radians, if the description carried a third component
    pub theta: Option<f64>,
}

impl Origin {
    /// Create an origin with no yaw component
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, theta: None }
    }
}

/// Parsed map description.
///
/// Immutable once parsed; created once per map load.
#[derive(Clone, Debug)]
pub struct MapMetadata {
    /// Map resolution in meters per pixel (always positive)
    pub resolution: f64,
    /// World coordinates of the bottom-left pixel
    pub origin: Origin,
    /// Whether the occupancy convention is inverted (0 or 1)
    pub negate: i32,
    /// Occupancy probability above which a cell counts as occupied
    pub occupied_thresh: Option<f64>,
    /// Occupancy probability below which a cell counts as free
    pub free_thresh: Option<f64>,
    /// Grid image filename, relative to the description file
    pub image: Option<String>,
    /// Unrecognized keys, retained as raw trimmed strings
    pub extras: BTreeMap<String, String>,
}

impl MapMetadata {
    /// Parse a map description text.
    ///
    /// Rules:
    /// - lines are trimmed; blank lines and `#` comments are skipped
    /// - each remaining line splits on the first `:` into key/value
    /// - `resolution`, `occupied_thresh`, `free_thresh` parse as floats,
    ///   `negate` as an integer
    /// - `origin` accepts a bracketed single-line list `[x, y, theta]` or a
    ///   multi-line block of `-`-prefixed floats ending at the first line
    ///   that does not start with `-`
    ///
    /// Fails if `resolution` is missing, non-positive or non-numeric, or if
    /// `origin` has fewer than 2 components.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();

        let mut resolution: Option<f64> = None;
        let mut origin_components: Option<Vec<f64>> = None;
        let mut negate = 0;
        let mut occupied_thresh = None;
        let mut free_thresh = None;
        let mut image = None;
        let mut extras = BTreeMap::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if line.is_empty() || line.starts_with('#') {
                i += 1;
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                i += 1;
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "resolution" => resolution = Some(parse_float(key, value)?),
                "occupied_thresh" => occupied_thresh = Some(parse_float(key, value)?),
                "free_thresh" => free_thresh = Some(parse_float(key, value)?),
                "negate" => {
                    negate = value.parse::<i32>().map_err(|_| {
                        Error::MetadataParse(format!("invalid integer for negate: {value:?}"))
                    })?;
                }
                "origin" => {
                    if value.is_empty() {
                        // Multi-line block: consume `-`-prefixed lines
                        let mut components = Vec::new();
                        let mut j = i + 1;
                        while j < lines.len() {
                            let item = lines[j].trim();
                            let Some(rest) = item.strip_prefix('-') else {
                                break;
                            };
                            components.push(parse_float("origin", rest.trim())?);
                            j += 1;
                        }
                        origin_components = Some(components);
                        i = j;
                        continue;
                    } else {
                        let inner = value.trim_start_matches('[').trim_end_matches(']');
                        let mut components = Vec::new();
                        for part in inner.split(',') {
                            components.push(parse_float("origin", part.trim())?);
                        }
                        origin_components = Some(components);
                    }
                }
                "image" => image = Some(value.to_string()),
                _ => {
                    extras.insert(key.to_string(), value.to_string());
                }
            }
            i += 1;
        }

        let resolution = resolution
            .ok_or_else(|| Error::MetadataParse("missing required key: resolution".into()))?;
        if resolution <= 0.0 {
            return Err(Error::MetadataParse(format!(
                "resolution must be positive, got {resolution}"
            )));
        }

        let components = origin_components
            .ok_or_else(|| Error::MetadataParse("missing required key: origin".into()))?;
        if components.len() < 2 {
            return Err(Error::MetadataParse(format!(
                "origin needs at least 2 components, got {}",
                components.len()
            )));
        }
        let origin = Origin {
            x: components[0],
            y: components[1],
            theta: components.get(2).copied(),
        };

        for (name, thresh) in [("occupied_thresh", occupied_thresh), ("free_thresh", free_thresh)] {
            if let Some(t) = thresh {
                if !(0.0..=1.0).contains(&t) {
                    log::warn!("{name} outside [0, 1]: {t}");
                }
            }
        }

        Ok(Self {
            resolution,
            origin,
            negate,
            occupied_thresh,
            free_thresh,
            image,
            extras,
        })
    }
}

fn parse_float(key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| Error::MetadataParse(format!("invalid number for {key}: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = "resolution: 0.05\norigin: [-10.0, -10.0, 0]\n";
        let meta = MapMetadata::parse(text).unwrap();
        assert_eq!(meta.resolution, 0.05);
        assert_eq!(meta.origin.x, -10.0);
        assert_eq!(meta.origin.y, -10.0);
        assert_eq!(meta.origin.theta, Some(0.0));
    }

    #[test]
    fn test_parse_full_description() {
        let text = "\
# Sample occupancy map
image: sample-map.pgm
resolution: 0.05
origin: [-20.0, -15.0, 0.0]
negate: 0
occupied_thresh: 0.65
free_thresh: 0.196
mode: trinary
";
        let meta = MapMetadata::parse(text).unwrap();
        assert_eq!(meta.image.as_deref(), Some("sample-map.pgm"));
        assert_eq!(meta.negate, 0);
        assert_eq!(meta.occupied_thresh, Some(0.65));
        assert_eq!(meta.free_thresh, Some(0.196));
        assert_eq!(meta.extras.get("mode").map(String::as_str), Some("trinary"));
    }

    #[test]
    fn test_parse_multiline_origin() {
        let text = "\
resolution: 0.1
origin:
- -5.0
- -7.5
- 0.0
negate: 1
";
        let meta = MapMetadata::parse(text).unwrap();
        assert_eq!(meta.origin.x, -5.0);
        assert_eq!(meta.origin.y, -7.5);
        assert_eq!(meta.origin.theta, Some(0.0));
        // The block must end at the first non-dash line
        assert_eq!(meta.negate, 1);
    }

    #[test]
    fn test_parse_two_component_origin() {
        let meta = MapMetadata::parse("resolution: 0.05\norigin: [1.0, 2.0]\n").unwrap();
        assert_eq!(meta.origin.theta, None);
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        let meta = MapMetadata::parse("resolution: 0.05\norigin: [0, 0]\nnote: a:b:c\n").unwrap();
        assert_eq!(meta.extras.get("note").map(String::as_str), Some("a:b:c"));
    }

    #[test]
    fn test_missing_resolution_fails() {
        let result = MapMetadata::parse("origin: [0, 0]\n");
        assert!(matches!(result, Err(Error::MetadataParse(_))));
    }

    #[test]
    fn test_non_positive_resolution_fails() {
        assert!(MapMetadata::parse("resolution: 0\norigin: [0, 0]\n").is_err());
        assert!(MapMetadata::parse("resolution: -0.05\norigin: [0, 0]\n").is_err());
    }

    #[test]
    fn test_non_numeric_resolution_fails() {
        let result = MapMetadata::parse("resolution: fast\norigin: [0, 0]\n");
        assert!(matches!(result, Err(Error::MetadataParse(_))));
    }

    #[test]
    fn test_short_origin_fails() {
        let result = MapMetadata::parse("resolution: 0.05\norigin: [1.0]\n");
        assert!(matches!(result, Err(Error::MetadataParse(_))));
    }

    #[test]
    fn test_missing_origin_fails() {
        let result = MapMetadata::parse("resolution: 0.05\n");
        assert!(matches!(result, Err(Error::MetadataParse(_))));
    }
}

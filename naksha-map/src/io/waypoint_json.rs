//! Waypoint export/import JSON document.
//!
//! Document layout:
//!
//! ```json
//! {
//!   "waypoints": [ { "id": 1, "name": "Dock", "x": 0.5, "y": -1.2,
//!                    "color": "#ff0000" } ],
//!   "metadata": { "created": "2026-08-25T12:00:00+00:00", "count": 1,
//!                 "format": "xavier-waypoint-manager-v1.0" }
//! }
//! ```
//!
//! Import trusts each entry to carry at least `id`, `x`, `y`; missing name
//! and color fall back to defaults, unknown fields are tolerated. A
//! malformed document fails with [`Error::ImportFormat`] and the caller's
//! store stays untouched.

use crate::error::{Error, Result};
use crate::waypoint::Waypoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format tag written into every exported document
pub const DOCUMENT_FORMAT: &str = "xavier-waypoint-manager-v1.0";

/// Export metadata block
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Export time as an ISO-8601 string
    pub created: String,
    /// Number of waypoints in the document
    pub count: usize,
    /// Format identifier
    pub format: String,
}

/// Complete waypoint export document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WaypointDocument {
    /// Waypoints in display/export order
    pub waypoints: Vec<Waypoint>,
    /// Export metadata; tolerated absent on import
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl WaypointDocument {
    /// Build a document with an explicit creation time
    pub fn new(waypoints: &[Waypoint], created: DateTime<Utc>) -> Self {
        Self {
            waypoints: waypoints.to_vec(),
            metadata: Some(DocumentMetadata {
                created: created.to_rfc3339(),
                count: waypoints.len(),
                format: DOCUMENT_FORMAT.to_string(),
            }),
        }
    }

    /// Build a document stamped with the current time
    pub fn now(waypoints: &[Waypoint]) -> Self {
        Self::new(waypoints, Utc::now())
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an export document. Malformed JSON or a document without a
    /// `waypoints` array fails with [`Error::ImportFormat`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ImportFormat(e.to_string()))
    }

    /// Consume the document, yielding the waypoint list
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

/// Export waypoints to a JSON file, stamped with the current time.
pub fn export_file<P: AsRef<Path>>(path: P, waypoints: &[Waypoint]) -> Result<()> {
    let document = WaypointDocument::now(waypoints);
    std::fs::write(path, document.to_json()?)?;
    Ok(())
}

/// Import waypoints from a JSON file. The file is fully validated before
/// anything is returned, so a failure has no side effects.
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<Vec<Waypoint>> {
    let json = std::fs::read_to_string(path)?;
    Ok(WaypointDocument::from_json(&json)?.into_waypoints())
}

//! Waypoint set persistence.

pub mod waypoint_json;

pub use waypoint_json::{
    export_file, import_file, DocumentMetadata, WaypointDocument, DOCUMENT_FORMAT,
};

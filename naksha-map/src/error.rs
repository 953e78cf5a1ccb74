//! Error types for naksha-map

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Map-domain error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or incomplete map description text
    #[error("Metadata parse error: {0}")]
    MetadataParse(String),

    /// Malformed or truncated grid image
    #[error("Grid decode error: {0}")]
    GridDecode(String),

    /// Waypoint id already present in the collection
    #[error("Duplicate waypoint id: {0}")]
    DuplicateId(u64),

    /// Waypoint id not present in the collection
    #[error("Waypoint not found: {0}")]
    NotFound(u64),

    /// Malformed waypoint export document
    #[error("Import format error: {0}")]
    ImportFormat(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

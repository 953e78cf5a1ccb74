//! Error types for naksha-view

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Viewer error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Map-domain error
    #[error("Map error: {0}")]
    Map(#[from] naksha_map::Error),

    /// Configuration problem
    #[error("Config error: {0}")]
    Config(String),

    /// Rendering failure
    #[error("Render error: {0}")]
    Render(String),

    /// Operation needs a loaded map
    #[error("No map loaded")]
    NoMap,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

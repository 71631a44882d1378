//! Error types for the life cycle wheel

use thiserror::Error;

/// Errors surfaced by the wheel library
#[derive(Error, Debug)]
pub enum WheelError {
    /// Filesystem or terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No phase carries the requested id
    #[error("Unknown phase id: {0}")]
    UnknownPhase(u32),

    /// A layout was requested for zero phases
    #[error("Cannot lay out an empty phase registry")]
    EmptyRegistry,

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WheelError>;

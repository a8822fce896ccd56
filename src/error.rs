//! Error types for the wheel.
//!
//! Degenerate wheel input (no values, bad tick counts) is never an error; it is
//! clamped or substituted where it is read. Only resource and I/O failures show
//! up here.

/// Errors that can occur while wiring up or persisting the wheel.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    /// A required host resource (window, canvas, 2D context) is unavailable.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// The settings store could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The drawing surface rejected a call.
    #[error("canvas error: {0}")]
    Canvas(String),
}

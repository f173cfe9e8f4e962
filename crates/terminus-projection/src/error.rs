//! Projection error types.

/// Errors raised while building a pixel-to-disk mapping.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProjectionError {
    /// The disk radius in pixels must be finite and strictly positive.
    #[error("invalid disk radius: {0} px")]
    InvalidRadius(f64),

    /// The disk center must have finite coordinates.
    #[error("invalid disk center: ({0}, {1})")]
    InvalidCenter(f64, f64),
}

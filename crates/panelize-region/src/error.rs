//! Error types for panelize-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] panelize_core::Error),

    /// A contour detector failed to analyze the image
    ///
    /// Produced by external detector implementations; the built-in
    /// component detector cannot fail.
    #[error("contour detection failed: {0}")]
    DetectionFailed(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

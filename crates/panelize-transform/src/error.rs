//! Error types for panelize-transform

use thiserror::Error;

/// Errors that can occur during transform operations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] panelize_core::Error),

    /// Invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

//! Error types for panelize-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] panelize_core::Error),

    /// Invalid structuring element size
    #[error("invalid kernel size: {hsize}x{vsize}")]
    InvalidKernel { hsize: u32, vsize: u32 },

    /// Invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

//! Error types for panelize-seg

use thiserror::Error;

/// Errors that can occur during panel segmentation
#[derive(Debug, Error)]
pub enum SegError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] panelize_core::Error),

    /// Filtering error
    #[error("filter error: {0}")]
    Filter(#[from] panelize_filter::FilterError),

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] panelize_region::RegionError),

    /// Transform error
    #[error("transform error: {0}")]
    Transform(#[from] panelize_transform::TransformError),

    /// A region contains no pixels below the ink threshold
    ///
    /// Recoverable: the caller treats the region as holding zero panels.
    #[error("empty region: no pixels below threshold {threshold}")]
    EmptyRegion { threshold: u8 },

    /// The adaptive escalation loop did not converge within its budget
    ///
    /// Fatal for the page; callers may fall back to an unpanelized
    /// single full-page result.
    #[error("too many candidate regions: {count} after {attempts} attempts")]
    TooManyRegions { count: usize, attempts: u32 },

    /// Invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for segmentation operations
pub type SegResult<T> = Result<T, SegError>;

//! Error types for panelize-core
//!
//! Provides a unified error type for the core data structures. Each variant
//! captures enough context for diagnostics without exposing internal
//! implementation details.

use thiserror::Error;

/// Panelize core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Rectangle with non-positive width or height
    #[error("degenerate rectangle: w={w}, h={h}")]
    DegenerateRect { w: i32, h: i32 },

    /// Pixel coordinates outside the image bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

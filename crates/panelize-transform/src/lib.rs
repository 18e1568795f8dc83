//! panelize-transform - Geometric transforms for panel geometry
//!
//! Currently a single operation: high-quality rotation about the image
//! center, used by the deskew pass. Gutter and contour detection both
//! assume axis-aligned panel boundaries, so deskewing runs before any
//! geometry analysis.
//!
//! # Example
//!
//! ```
//! use panelize_core::Gray;
//! use panelize_transform::{RotateFill, rotate_about_center};
//!
//! let page = Gray::filled(64, 64, 255).unwrap();
//! let rotated = rotate_about_center(&page, -2.5, RotateFill::White).unwrap();
//! assert_eq!(rotated.width(), 64);
//! ```

pub mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{RotateFill, rotate_about_center};

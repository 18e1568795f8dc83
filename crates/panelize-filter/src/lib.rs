//! panelize-filter - Pixel-level preparation for panel geometry
//!
//! This crate provides the filters the geometry passes run before any
//! rectangle is computed:
//!
//! - **Morphology** - grayscale brick erosion/dilation
//! - **Smoothing** - 3x3 Gaussian blur
//! - **Thresholding** - fixed, Otsu, and balanced-mean auto search
//! - **Enhancement** - linear contrast stretch
//!
//! # Example
//!
//! ```
//! use panelize_core::Gray;
//! use panelize_filter::{auto_threshold, threshold_binary};
//!
//! let page = Gray::filled(32, 32, 255).unwrap();
//! let t = auto_threshold(&page, None);
//! let binary = threshold_binary(&page, t);
//! assert_eq!(binary.width(), 32);
//! ```

pub mod convolve;
pub mod enhance;
pub mod error;
pub mod morph;
pub mod threshold;

pub use convolve::gaussian_blur_3x3;
pub use enhance::adjust_contrast;
pub use error::{FilterError, FilterResult};
pub use morph::{dilate, erode};
pub use threshold::{auto_threshold, otsu_threshold, threshold_binary};

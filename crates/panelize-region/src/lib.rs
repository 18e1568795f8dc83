//! panelize-region - Contour extraction for panel geometry
//!
//! This crate defines the contour-detection collaborator boundary used by
//! the adaptive panelizer and ships a self-contained default detector:
//!
//! - [`Contour`] / [`ContourDetector`] - the interface: bounding boxes
//!   with parent links, depth derived by walking parents to a root
//! - [`ComponentContourDetector`] - dual-polarity connected-component
//!   labeling with enclosure-derived hierarchy
//!
//! # Example
//!
//! ```
//! use panelize_core::{Gray, Rect};
//! use panelize_region::{ComponentContourDetector, ContourDetector, depth};
//!
//! let mut page = Gray::filled(30, 30, 255).unwrap();
//! page.fill_rect(&Rect::new_unchecked(10, 10, 5, 5), 0);
//!
//! let contours = ComponentContourDetector::default()
//!     .find_contours(&page)
//!     .unwrap();
//! assert_eq!(contours.len(), 2);
//! assert_eq!(depth(&contours, 1), 1);
//! ```

pub mod contour;
pub mod error;
pub mod label;

pub use contour::{Contour, ContourDetector, depth};
pub use error::{RegionError, RegionResult};
pub use label::{ComponentContourDetector, Connectivity};

//! panelize-seg - Panel segmentation for scanned comic pages
//!
//! The engine proper. Given a grayscale page, produce a minimal,
//! non-redundant, correctly-ordered set of panel bounding boxes:
//!
//! - **split** - recursive whitespace-gutter partitioning
//! - **merge** - connected-component rectangle merging with containment
//!   removal
//! - **sort** - grid-quantized top-to-bottom, left-to-right reading order
//! - **skew** - page deskewing from the minimum-area ink rectangle
//! - **panelize** - the two candidate strategies over the shared back end
//! - **page** - per-page pipeline and parallel batch driver
//!
//! # Example
//!
//! ```
//! use panelize_core::{Gray, Rect};
//! use panelize_seg::{PageOptions, extract_panels};
//!
//! let mut page = Gray::filled(200, 200, 255).unwrap();
//! page.fill_rect(&Rect::new_unchecked(20, 20, 160, 60), 0);
//! page.fill_rect(&Rect::new_unchecked(20, 120, 160, 60), 0);
//!
//! let result = extract_panels(&page, &PageOptions::new()).unwrap();
//! assert_eq!(result.panels.len(), 2);
//! ```

pub mod error;
pub mod merge;
pub mod page;
pub mod panelize;
pub mod skew;
pub mod sort;
pub mod split;

pub use error::{SegError, SegResult};
pub use merge::merge;
pub use page::{PageOptions, PageResult, PanelStrategy, extract_panels, extract_panels_batch};
pub use panelize::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_STABILITY_BOUND, FRAME_WIDTH, PanelizeOptions, Panelization,
    panelize_contours, panelize_split,
};
pub use skew::{correct_skew, estimate_skew_angle};
pub use sort::{DEFAULT_GRID, sort_panels};
pub use split::split;

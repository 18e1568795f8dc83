//! Panelize - Panel geometry engine for scanned comic pages
//!
//! Extracts rectangular panel regions from a scanned page so downstream
//! tooling (ebook packaging, zoom overlays) can address each panel
//! individually, in reading order. The engine is purely geometric:
//! image decoding, packaging formats, and CLI plumbing live elsewhere.
//!
//! # Overview
//!
//! - Page deskewing from the minimum-area ink rectangle
//! - Recursive whitespace-gutter splitting
//! - Contour detection with escalating erosion, rectangle merging, and
//!   containment removal
//! - Grid-quantized top-to-bottom, left-to-right panel ordering
//! - A parallel batch driver over independent pages
//!
//! # Example
//!
//! ```
//! use panelize::{Gray, PageOptions, Rect, extract_panels};
//!
//! // A white page with two panels.
//! let mut page = Gray::filled(400, 400, 255).unwrap();
//! page.fill_rect(&Rect::new_unchecked(20, 20, 360, 150), 0);
//! page.fill_rect(&Rect::new_unchecked(20, 220, 360, 150), 0);
//!
//! let result = extract_panels(&page, &PageOptions::new()).unwrap();
//! assert_eq!(result.panels.len(), 2);
//! assert!(result.panels[0].y < result.panels[1].y);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use panelize_core::*;

// Re-export the page pipeline surface, the usual entry point
pub use panelize_seg::{
    PageOptions, PageResult, PanelStrategy, extract_panels, extract_panels_batch,
};

// Re-export domain crates as modules to avoid name conflicts
pub use panelize_filter as filter;
pub use panelize_region as region;
pub use panelize_seg as seg;
pub use panelize_transform as transform;

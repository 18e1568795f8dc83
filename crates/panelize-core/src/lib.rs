//! panelize-core - Core data structures for the panel geometry engine
//!
//! This crate provides the two primitives everything else is built on:
//!
//! - [`Rect`] - axis-aligned rectangle in page pixel coordinates
//! - [`Gray`] - 8-bit grayscale page buffer (row-major, 0-255)
//!
//! # Example
//!
//! ```
//! use panelize_core::{Gray, Rect};
//!
//! let page = Gray::filled(100, 100, 255).unwrap();
//! assert_eq!(page.width(), 100);
//!
//! let a = Rect::new(0, 0, 50, 50).unwrap();
//! let b = Rect::new(25, 25, 50, 50).unwrap();
//! assert_eq!(a.union(&b), Rect::new_unchecked(0, 0, 75, 75));
//! ```

pub mod error;
pub mod gray;
pub mod rect;

pub use error::{Error, Result};
pub use gray::Gray;
pub use rect::{Rect, bounding_rect};

//! Contours and the contour-detection collaborator boundary
//!
//! The panelizer does not trace outlines itself; it consumes a set of
//! contours with parent links from a [`ContourDetector`]. The default
//! implementation lives in [`crate::label`], but any detector (e.g. a
//! binding to an external vision library) can be substituted as long as
//! it honors the hierarchy contract below.

use crate::error::RegionResult;
use panelize_core::{Gray, Rect};

/// One detected contour: its bounding box and its place in the nesting
/// hierarchy
///
/// `parent` is the index of the contour immediately enclosing this one,
/// or `None` for a root at page level. Depth is derived by walking
/// parents to a root; detectors must produce parent indices that refer
/// to earlier entries so the walk terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contour {
    /// Bounding box in page coordinates
    pub bounds: Rect,
    /// Index of the enclosing contour, `None` for roots
    pub parent: Option<usize>,
}

/// Compute the nesting depth of a contour by walking its parent links
///
/// Roots have depth zero. The walk is capped at the contour count, so a
/// malformed cyclic hierarchy yields a finite (meaningless) depth rather
/// than spinning forever.
pub fn depth(contours: &[Contour], index: usize) -> usize {
    let mut depth = 0;
    let mut current = index;
    while let Some(parent) = contours[current].parent {
        depth += 1;
        current = parent;
        if depth > contours.len() {
            break;
        }
    }
    depth
}

/// Contour-detection collaborator
///
/// Given a binarized page (zero = dark ink, nonzero = background/paper),
/// produce all contours with their hierarchy links. The page is expected
/// to carry a background-colored frame so that exactly the frame-connected
/// region forms the root.
pub trait ContourDetector {
    /// Find all contours in a binary image
    fn find_contours(&self, binary: &Gray) -> RegionResult<Vec<Contour>>;
}

//! Panel reading order
//!
//! Orders a final rectangle set top-to-bottom, left-to-right. Top-left
//! corners are quantized onto a coarse page grid first, so panels whose
//! baselines differ by a few pixels of scan skew still land in the same
//! "row" of reading order.

use crate::error::{SegError, SegResult};
use panelize_core::Rect;

/// Default grid granularity: a 10x10 quantization of the page
pub const DEFAULT_GRID: u32 = 10;

/// Sort panels into reading order
///
/// The key is `(y / rowHeight, x / colWidth)` with
/// `rowHeight = page_height / grid` and `colWidth = page_width / grid`,
/// cells clamped to at least one pixel. The sort is stable, so panels
/// quantized into the same cell keep their input order.
///
/// # Errors
///
/// Returns [`SegError::InvalidParameter`] if `grid` or either page
/// dimension is zero.
pub fn sort_panels(
    panels: &[Rect],
    page_width: u32,
    page_height: u32,
    grid: u32,
) -> SegResult<Vec<Rect>> {
    if grid == 0 {
        return Err(SegError::InvalidParameter(
            "sort grid must be at least 1".to_string(),
        ));
    }
    if page_width == 0 || page_height == 0 {
        return Err(SegError::InvalidParameter(format!(
            "page dimensions must be positive, got {page_width}x{page_height}"
        )));
    }

    let col_width = (page_width / grid).max(1) as i32;
    let row_height = (page_height / grid).max(1) as i32;

    let mut ordered = panels.to_vec();
    ordered.sort_by_key(|r| (r.y.div_euclid(row_height), r.x.div_euclid(col_width)));
    Ok(ordered)
}

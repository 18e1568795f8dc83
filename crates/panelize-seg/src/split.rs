//! Recursive whitespace splitting
//!
//! Partitions a page into panels purely from pixel intensities: a region
//! is tight-cropped to its ink, then cut at the topmost full-width
//! whitespace gutter row, or failing that the leftmost full-height gutter
//! column, and the halves are split recursively. A region with no gutter
//! in either direction is a leaf panel.
//!
//! Horizontal splitting is always attempted before vertical at every
//! level, so the decomposition is fixed for a given threshold.

use crate::error::{SegError, SegResult};
use panelize_core::{Gray, Rect};

/// A sub-rectangle of the page under analysis, in absolute coordinates
#[derive(Debug, Clone, Copy)]
struct Window {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

/// Split a page into panel rectangles along whitespace gutters
///
/// Pixels strictly below `threshold` are ink; a gutter is a row or
/// column of the cropped region whose every pixel is at or above the
/// threshold. Returned rectangles are in page-absolute coordinates.
///
/// # Errors
///
/// - [`SegError::InvalidParameter`] if `threshold` is zero (no pixel can
///   be ink).
/// - [`SegError::EmptyRegion`] if the page holds no ink at all; callers
///   treat this as "zero panels", not a failure of the page pipeline.
pub fn split(page: &Gray, threshold: u8) -> SegResult<Vec<Rect>> {
    if threshold == 0 {
        return Err(SegError::InvalidParameter(
            "split threshold must be at least 1".to_string(),
        ));
    }

    let mut panels = Vec::new();
    let full = Window {
        x: 0,
        y: 0,
        w: page.width(),
        h: page.height(),
    };
    split_window(page, threshold, full, &mut panels)?;
    Ok(panels)
}

fn split_window(page: &Gray, threshold: u8, win: Window, out: &mut Vec<Rect>) -> SegResult<()> {
    // Tight-crop to the ink bounding box. Only the top-level call can
    // come up empty: recursive windows are flanked by the ink that
    // delimited their gutter.
    let Some(ink) = ink_bounds(page, threshold, win) else {
        return Err(SegError::EmptyRegion { threshold });
    };

    if let Some(gutter_y) = find_gutter_row(page, threshold, ink) {
        let top = Window {
            h: gutter_y - ink.y,
            ..ink
        };
        let bottom = Window {
            y: gutter_y,
            h: ink.y + ink.h - gutter_y,
            ..ink
        };
        split_window(page, threshold, top, out)?;
        split_window(page, threshold, bottom, out)?;
    } else if let Some(gutter_x) = find_gutter_col(page, threshold, ink) {
        let left = Window {
            w: gutter_x - ink.x,
            ..ink
        };
        let right = Window {
            x: gutter_x,
            w: ink.x + ink.w - gutter_x,
            ..ink
        };
        split_window(page, threshold, left, out)?;
        split_window(page, threshold, right, out)?;
    } else {
        out.push(Rect::new_unchecked(
            ink.x as i32,
            ink.y as i32,
            ink.w as i32,
            ink.h as i32,
        ));
    }

    Ok(())
}

/// Bounding window of all ink pixels inside `win`, or `None` if blank
fn ink_bounds(page: &Gray, threshold: u8, win: Window) -> Option<Window> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for y in win.y..win.y + win.h {
        let row = &page.row(y)[win.x as usize..(win.x + win.w) as usize];
        for (dx, &v) in row.iter().enumerate() {
            if v < threshold {
                let x = win.x + dx as u32;
                if !found {
                    found = true;
                    min_x = x;
                    max_x = x;
                    min_y = y;
                    max_y = y;
                } else {
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    max_y = y;
                }
            }
        }
    }

    found.then(|| Window {
        x: min_x,
        y: min_y,
        w: max_x - min_x + 1,
        h: max_y - min_y + 1,
    })
}

/// Topmost row of `win` whose every pixel is whitespace
///
/// The window is tight-cropped, so its first and last rows contain ink
/// and any gutter found lies strictly inside.
fn find_gutter_row(page: &Gray, threshold: u8, win: Window) -> Option<u32> {
    (win.y..win.y + win.h).find(|&y| {
        page.row(y)[win.x as usize..(win.x + win.w) as usize]
            .iter()
            .all(|&v| v >= threshold)
    })
}

/// Leftmost column of `win` whose every pixel is whitespace
fn find_gutter_col(page: &Gray, threshold: u8, win: Window) -> Option<u32> {
    (win.x..win.x + win.w)
        .find(|&x| (win.y..win.y + win.h).all(|y| page.get_pixel_unchecked(x, y) >= threshold))
}

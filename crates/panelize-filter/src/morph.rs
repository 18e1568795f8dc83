//! Grayscale morphological operations
//!
//! Implements erosion and dilation for 8-bit grayscale images with a
//! brick (rectangular) structuring element:
//!
//! - **Erosion**: minimum pixel value in the neighborhood; on white-paper
//!   scans this thickens dark ink, closing hairline gaps in panel borders
//! - **Dilation**: maximum pixel value in the neighborhood; the inverse
//!
//! The brick is separable, so each iteration runs a horizontal and a
//! vertical pass. Samples outside the image are ignored, leaving border
//! pixels governed by their in-bounds neighborhood only.

use crate::error::{FilterError, FilterResult};
use panelize_core::Gray;

/// Rank selection applied over the structuring element window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrickOp {
    Min,
    Max,
}

/// Erode a grayscale image with a brick structuring element
///
/// # Arguments
/// * `pix` - Input image
/// * `hsize` - Brick width in pixels (>= 1)
/// * `vsize` - Brick height in pixels (>= 1)
/// * `iterations` - Number of passes; 0 returns an unmodified copy
pub fn erode(pix: &Gray, hsize: u32, vsize: u32, iterations: u32) -> FilterResult<Gray> {
    run_brick(pix, hsize, vsize, iterations, BrickOp::Min)
}

/// Dilate a grayscale image with a brick structuring element
///
/// Arguments as for [`erode`].
pub fn dilate(pix: &Gray, hsize: u32, vsize: u32, iterations: u32) -> FilterResult<Gray> {
    run_brick(pix, hsize, vsize, iterations, BrickOp::Max)
}

fn run_brick(
    pix: &Gray,
    hsize: u32,
    vsize: u32,
    iterations: u32,
    op: BrickOp,
) -> FilterResult<Gray> {
    if hsize == 0 || vsize == 0 {
        return Err(FilterError::InvalidKernel { hsize, vsize });
    }

    let mut out = pix.clone();
    for _ in 0..iterations {
        if hsize > 1 {
            out = brick_pass(&out, hsize, true, op);
        }
        if vsize > 1 {
            out = brick_pass(&out, vsize, false, op);
        }
    }
    Ok(out)
}

/// One separable pass along rows (`horizontal`) or columns
///
/// The window for output position `i` covers `i - size/2 .. i - size/2 + size`,
/// the anchor convention used by square structuring elements of both odd
/// and even size.
fn brick_pass(pix: &Gray, size: u32, horizontal: bool, op: BrickOp) -> Gray {
    let w = pix.width();
    let h = pix.height();
    let mut out = Gray::new(w, h).expect("dimensions already validated");

    let lead = (size / 2) as i64;
    let span = size as i64;

    for y in 0..h {
        for x in 0..w {
            let (pos, limit) = if horizontal {
                (x as i64, w as i64)
            } else {
                (y as i64, h as i64)
            };
            let start = (pos - lead).max(0);
            let end = (pos - lead + span).min(limit);

            let mut acc = pix.get_pixel_unchecked(x, y);
            for i in start..end {
                let v = if horizontal {
                    pix.get_pixel_unchecked(i as u32, y)
                } else {
                    pix.get_pixel_unchecked(x, i as u32)
                };
                acc = match op {
                    BrickOp::Min => acc.min(v),
                    BrickOp::Max => acc.max(v),
                };
            }
            out.set_pixel_unchecked(x, y, acc);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelize_core::Rect;

    fn dot_page() -> Gray {
        let mut g = Gray::filled(9, 9, 255).unwrap();
        g.set_pixel(4, 4, 0).unwrap();
        g
    }

    #[test]
    fn test_erode_grows_ink() {
        let g = dot_page();
        let eroded = erode(&g, 3, 3, 1).unwrap();
        // A single dark pixel spreads to its 3x3 neighborhood.
        for y in 3..=5 {
            for x in 3..=5 {
                assert_eq!(eroded.get_pixel_unchecked(x, y), 0);
            }
        }
        assert_eq!(eroded.get_pixel_unchecked(2, 4), 255);
    }

    #[test]
    fn test_dilate_undoes_single_erosion_of_block() {
        let mut g = Gray::filled(12, 12, 255).unwrap();
        g.fill_rect(&Rect::new_unchecked(4, 4, 4, 4), 0);
        let eroded = erode(&g, 3, 3, 1).unwrap();
        let reopened = dilate(&eroded, 3, 3, 1).unwrap();
        // Dilation shrinks the inked region back; the block interior stays dark.
        assert_eq!(reopened.get_pixel_unchecked(5, 5), 0);
        assert_eq!(reopened.get_pixel_unchecked(1, 1), 255);
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let g = dot_page();
        let same = erode(&g, 3, 3, 0).unwrap();
        assert_eq!(same, g);
    }

    #[test]
    fn test_invalid_kernel() {
        let g = dot_page();
        assert!(erode(&g, 0, 3, 1).is_err());
        assert!(dilate(&g, 2, 0, 1).is_err());
    }

    #[test]
    fn test_even_kernel_anchor() {
        // A 2x2 brick with the size/2 anchor reaches one pixel up-left.
        let g = dot_page();
        let eroded = erode(&g, 2, 2, 1).unwrap();
        assert_eq!(eroded.get_pixel_unchecked(4, 4), 0);
        assert_eq!(eroded.get_pixel_unchecked(5, 5), 0);
        assert_eq!(eroded.get_pixel_unchecked(3, 3), 255);
    }
}

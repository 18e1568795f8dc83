//! Small-kernel convolution
//!
//! The geometry passes only need the 3x3 Gaussian smoothing step that
//! runs between erosion and binarization, so this module implements that
//! single kernel directly rather than a general convolution engine.

use panelize_core::Gray;

/// 3x3 Gaussian kernel, row-major, summing to 16
const GAUSS_3X3: [[u16; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Smooth an image with a 3x3 Gaussian kernel
///
/// Edge pixels are handled by replicating the nearest in-bounds sample,
/// so the output has the same dimensions and no darkened border.
pub fn gaussian_blur_3x3(pix: &Gray) -> Gray {
    let w = pix.width();
    let h = pix.height();
    let mut out = Gray::new(w, h).expect("dimensions already validated");

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0u32;
            for (ky, row) in GAUSS_3X3.iter().enumerate() {
                for (kx, &weight) in row.iter().enumerate() {
                    let sx = (x as i64 + kx as i64 - 1).clamp(0, w as i64 - 1) as u32;
                    let sy = (y as i64 + ky as i64 - 1).clamp(0, h as i64 - 1) as u32;
                    sum += weight as u32 * pix.get_pixel_unchecked(sx, sy) as u32;
                }
            }
            out.set_pixel_unchecked(x, y, ((sum + 8) / 16) as u8);
        }
    }

    out
}

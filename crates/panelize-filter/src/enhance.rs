//! Contrast adjustment
//!
//! Faded black-and-white scans benefit from a linear contrast stretch
//! before thresholding; this is the only enhancement the geometry
//! pipeline applies itself.

use crate::error::{FilterError, FilterResult};
use panelize_core::Gray;

/// Scale pixel intensities by `alpha`, saturating at 255
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] if `alpha` is not positive
/// or not finite.
pub fn adjust_contrast(pix: &Gray, alpha: f32) -> FilterResult<Gray> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "contrast alpha must be positive, got {alpha}"
        )));
    }

    let mut out = Gray::new(pix.width(), pix.height()).expect("dimensions already validated");
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let v = (pix.get_pixel_unchecked(x, y) as f32 * alpha).round();
            out.set_pixel_unchecked(x, y, v.clamp(0.0, 255.0) as u8);
        }
    }
    Ok(out)
}

//! Skew detection and correction
//!
//! Scanned pages are rarely perfectly square on the platen. The gutter
//! and contour passes both assume axis-aligned panel boundaries, so the
//! page is deskewed first:
//!
//! 1. Binarize with Otsu's threshold and take the dark side as
//!    foreground.
//! 2. Compute the minimum-area rotated rectangle enclosing all
//!    foreground pixels (convex hull + edge-direction sweep).
//! 3. Normalize the rectangle's orientation into a correction angle
//!    within +/-45 degrees.
//! 4. Rotate the original image about its center by that angle with
//!    Lanczos resampling, filling exposed borders with white.

use crate::error::{SegError, SegResult};
use panelize_core::Gray;
use panelize_filter::otsu_threshold;
use panelize_transform::{RotateFill, rotate_about_center};
use tracing::debug;

/// Estimate the correction angle for a page, in degrees
///
/// The returned angle is what [`correct_skew`] rotates by; it always
/// lies in `[-45, 45]`. Axis-aligned content yields zero.
///
/// # Errors
///
/// Returns [`SegError::EmptyRegion`] when the page has no foreground at
/// Otsu's threshold (a blank page); callers skip deskewing such pages.
pub fn estimate_skew_angle(page: &Gray) -> SegResult<f32> {
    let threshold = otsu_threshold(page);

    let mut points: Vec<(i64, i64)> = Vec::new();
    for y in 0..page.height() {
        for x in 0..page.width() {
            if page.get_pixel_unchecked(x, y) <= threshold {
                points.push((x as i64, y as i64));
            }
        }
    }
    if points.is_empty() {
        return Err(SegError::EmptyRegion { threshold });
    }

    let hull = convex_hull(&mut points);
    let raw = min_area_rect_angle(&hull);

    // The raw orientation lands in [-90, 0) and flips depending on which
    // rectangle edge the sweep reports. Fold it into a consistent
    // correction within +/-45 degrees.
    let angle = if raw < -45.0 { -(90.0 + raw) } else { -raw };

    debug!(threshold, raw, angle, "estimated page skew");
    Ok(angle as f32)
}

/// Deskew a page
///
/// Returns the rotated image and the applied angle. Must run before any
/// panel-geometry pass.
pub fn correct_skew(page: &Gray) -> SegResult<(Gray, f32)> {
    let angle = estimate_skew_angle(page)?;
    let rotated = rotate_about_center(page, angle, RotateFill::White)?;
    Ok((rotated, angle))
}

/// Monotone-chain convex hull
///
/// Input order does not matter; the points are sorted in place. Returns
/// the hull in counterclockwise order without the closing point, or the
/// degenerate 1-2 point hull for collinear input.
fn convex_hull(points: &mut Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    points.sort_unstable();
    points.dedup();
    let n = points.len();
    if n <= 2 {
        return points.clone();
    }

    let cross = |o: (i64, i64), a: (i64, i64), b: (i64, i64)| -> i64 {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };

    let mut hull: Vec<(i64, i64)> = Vec::with_capacity(2 * n);
    for &p in points.iter() {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in points.iter().rev() {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// Orientation of the minimum-area rectangle enclosing the hull
///
/// Sweeps every hull edge direction, projecting the hull onto the edge
/// frame; the minimum-area frame wins. The result is reduced modulo 90
/// into `[-90, 0)`, the reporting convention the normalization in
/// [`estimate_skew_angle`] expects.
fn min_area_rect_angle(hull: &[(i64, i64)]) -> f64 {
    if hull.len() < 2 {
        return -90.0;
    }

    let mut best_area = f64::INFINITY;
    let mut best_angle = 0.0f64;

    for i in 0..hull.len() {
        let p = hull[i];
        let q = hull[(i + 1) % hull.len()];
        let ex = (q.0 - p.0) as f64;
        let ey = (q.1 - p.1) as f64;
        let len = ex.hypot(ey);
        if len == 0.0 {
            continue;
        }
        let (ux, uy) = (ex / len, ey / len);

        let mut u_min = f64::INFINITY;
        let mut u_max = f64::NEG_INFINITY;
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        for &(x, y) in hull {
            let u = x as f64 * ux + y as f64 * uy;
            let v = -(x as f64) * uy + y as f64 * ux;
            u_min = u_min.min(u);
            u_max = u_max.max(u);
            v_min = v_min.min(v);
            v_max = v_max.max(v);
        }

        let area = (u_max - u_min) * (v_max - v_min);
        if area < best_area {
            best_area = area;
            best_angle = ey.atan2(ex).to_degrees();
        }
    }

    // Edges of the same rectangle differ by multiples of 90 degrees; in
    // image coordinates (y down) the sign flips relative to the usual
    // convention, hence the negation before folding into [-90, 0).
    let mut folded = (-best_angle) % 90.0;
    if folded >= 0.0 {
        folded -= 90.0;
    }
    folded
}

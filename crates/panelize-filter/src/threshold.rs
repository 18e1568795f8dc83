//! Binary thresholding
//!
//! Converts grayscale pages to binary and selects thresholds:
//! - Fixed threshold binarization
//! - Otsu's method (automatic threshold selection)
//! - Balanced-mean auto threshold search with a carried hint

use panelize_core::Gray;

/// Target band for the balanced-mean search: the mean of the binarized
/// page (0/255 values) must land in [125, 127], i.e. just under half the
/// pixels white.
const BALANCED_MEAN_LO: f64 = 125.0;
const BALANCED_MEAN_HI: f64 = 127.0;
const BALANCED_MEAN_MID: f64 = 126.0;

/// Convert a grayscale image to binary using a fixed threshold
///
/// Pixels strictly above `threshold` become white (255), the rest black (0).
pub fn threshold_binary(pix: &Gray, threshold: u8) -> Gray {
    let mut out = Gray::new(pix.width(), pix.height()).expect("dimensions already validated");
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let v = if pix.get_pixel_unchecked(x, y) > threshold {
                255
            } else {
                0
            };
            out.set_pixel_unchecked(x, y, v);
        }
    }
    out
}

/// Compute Otsu's threshold for a grayscale image
///
/// Returns the threshold maximizing between-class variance; pixels at or
/// below it are the dark class.
pub fn otsu_threshold(pix: &Gray) -> u8 {
    let hist = pix.histogram();
    let total: f64 = hist.iter().map(|&c| c as f64).sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0.0;
    let mut sum_bg = 0.0;
    let mut best_var = -1.0;
    let mut best_t = 0u8;

    for t in 0..256usize {
        weight_bg += hist[t] as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * hist[t] as f64;

        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between = weight_bg * weight_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg);
        if between > best_var {
            best_var = between;
            best_t = t as u8;
        }
    }

    best_t
}

/// Mean of the 0/255 binarization of `pix` at threshold `t`, from the
/// histogram suffix count
fn binarized_mean(hist: &[u64; 256], total: f64, t: u8) -> f64 {
    let above: u64 = hist[t as usize + 1..].iter().sum();
    255.0 * above as f64 / total
}

/// Find a threshold whose binarization splits the page near-evenly
///
/// Scans upward from `hint + 1`, then downward from `hint`, and returns
/// the first threshold whose binarized mean lands in the balanced band.
/// The hint is typically the threshold computed for the previous page of
/// the same book, carried forward by the caller as a starting point; with
/// no hint the search starts from zero.
///
/// If no threshold reaches the band (heavily inked or near-blank pages),
/// the threshold whose binarized mean is closest to the band's midpoint
/// is returned instead.
pub fn auto_threshold(pix: &Gray, hint: Option<u8>) -> u8 {
    let hist = pix.histogram();
    let total = pix.width() as f64 * pix.height() as f64;
    let start = hint.unwrap_or(0);

    let mut best_t = start;
    let mut best_dist = f64::INFINITY;

    let upward = (start as u16 + 1)..=255u16;
    let downward = (0..=start as u16).rev();
    for t in upward.chain(downward) {
        let mean = binarized_mean(&hist, total, t as u8);
        if (BALANCED_MEAN_LO..=BALANCED_MEAN_HI).contains(&mean) {
            return t as u8;
        }
        let dist = (mean - BALANCED_MEAN_MID).abs();
        if dist < best_dist {
            best_dist = dist;
            best_t = t as u8;
        }
    }

    best_t
}

//! Skew regression test
//!
//! Tests the deskew pass: the correction angle stays within +/-45
//! degrees for arbitrary input orientations, known rotations are
//! recovered, and correction actually straightens the page.

use panelize_core::{Gray, Rect};
use panelize_seg::{correct_skew, estimate_skew_angle};
use panelize_test::RegParams;
use panelize_transform::{RotateFill, rotate_about_center};

/// White page with two wide panel strips
fn strip_page() -> Gray {
    let mut g = Gray::filled(300, 300, 255).unwrap();
    g.fill_rect(&Rect::new_unchecked(30, 60, 240, 70), 0);
    g.fill_rect(&Rect::new_unchecked(30, 170, 240, 70), 0);
    g
}

#[test]
fn skew_reg() {
    let mut rp = RegParams::new("skew");

    // --- Test 1: straight page measures zero ---
    let angle = estimate_skew_angle(&strip_page()).expect("estimate");
    rp.compare_values(0.0, angle as f64, 0.05);

    // --- Test 2: known rotations are recovered (negated) ---
    for &skew in &[2.0f32, -2.0, 6.0, -6.0, 12.0] {
        let skewed = rotate_about_center(&strip_page(), skew, RotateFill::White).unwrap();
        let angle = estimate_skew_angle(&skewed).expect("estimate skewed");
        rp.compare_values(-skew as f64, angle as f64, 0.5);
    }

    // --- Test 3: the normalized angle never leaves [-45, 45] ---
    for &skew in &[0.0f32, 15.0, -30.0, 44.0, -44.0, 60.0, 90.0, -75.0] {
        let skewed = rotate_about_center(&strip_page(), skew, RotateFill::White).unwrap();
        let angle = estimate_skew_angle(&skewed).expect("estimate rotated");
        rp.compare_bool(
            (-45.0..=45.0).contains(&angle),
            "correction angle within +/-45",
        );
    }

    // --- Test 4: correction straightens the page ---
    let skewed = rotate_about_center(&strip_page(), 5.0, RotateFill::White).unwrap();
    let (corrected, applied) = correct_skew(&skewed).expect("correct");
    rp.compare_values(-5.0, applied as f64, 0.5);
    let residual = estimate_skew_angle(&corrected).expect("estimate corrected");
    rp.compare_values(0.0, residual as f64, 0.75);

    assert!(rp.cleanup(), "skew regression test failed");
}

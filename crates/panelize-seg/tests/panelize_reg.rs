//! Panelize regression test
//!
//! End-to-end scenarios through the contour pipeline: the two-squares
//! page, nested-content discarding, the escalation bound on pathological
//! noise, and the full page driver.

use panelize_core::{Gray, Rect};
use panelize_region::{ComponentContourDetector, Contour, ContourDetector, RegionResult};
use panelize_seg::{
    PageOptions, PanelStrategy, PanelizeOptions, SegError, extract_panels, extract_panels_batch,
    panelize_contours,
};
use panelize_test::RegParams;

/// The canonical synthetic page: 400x400 white, two 100x100 black
/// squares with no connecting ink
fn two_square_page() -> Gray {
    let mut g = Gray::filled(400, 400, 255).unwrap();
    g.fill_rect(&Rect::new_unchecked(10, 10, 100, 100), 0);
    g.fill_rect(&Rect::new_unchecked(250, 250, 100, 100), 0);
    g
}

/// Detector reporting thousands of speckles regardless of input
struct NoiseDetector;

impl ContourDetector for NoiseDetector {
    fn find_contours(&self, _binary: &Gray) -> RegionResult<Vec<Contour>> {
        let mut contours = vec![Contour {
            bounds: Rect::new_unchecked(0, 0, 5000, 5000),
            parent: None,
        }];
        for i in 0..3000i32 {
            contours.push(Contour {
                bounds: Rect::new_unchecked((i % 60) * 80, (i / 60) * 80, 2, 2),
                parent: Some(0),
            });
        }
        Ok(contours)
    }
}

#[test]
fn panelize_reg() {
    let mut rp = RegParams::new("panelize");

    // --- Test 1: two squares in, two ordered panels out ---
    let detector = ComponentContourDetector::default();
    let result = panelize_contours(&two_square_page(), &detector, &PanelizeOptions::new(200))
        .expect("panelize");
    rp.compare_values(2.0, result.panels.len() as f64, 0.0);

    // Approximately the drawn squares; preparation moves edges by a few
    // pixels.
    let first = result.panels[0];
    let second = result.panels[1];
    rp.compare_values(10.0, first.x as f64, 4.0);
    rp.compare_values(10.0, first.y as f64, 4.0);
    rp.compare_values(100.0, first.w as f64, 8.0);
    rp.compare_values(100.0, first.h as f64, 8.0);
    rp.compare_values(250.0, second.x as f64, 4.0);
    rp.compare_values(250.0, second.y as f64, 4.0);
    rp.compare_bool(
        first.y < second.y && first.x < second.x,
        "upper-left square reads first",
    );

    // --- Test 2: nested content inside a panel is not a panel ---
    let mut page = two_square_page();
    // A white hole with a dark dot inside the first square: depth two
    // and three, both discarded.
    page.fill_rect(&Rect::new_unchecked(40, 40, 30, 30), 255);
    page.fill_rect(&Rect::new_unchecked(52, 52, 6, 6), 0);
    let result =
        panelize_contours(&page, &detector, &PanelizeOptions::new(200)).expect("panelize nested");
    rp.compare_values(2.0, result.panels.len() as f64, 0.0);

    // --- Test 3: escalation terminates within its budget ---
    let blank = Gray::filled(64, 64, 255).unwrap();
    let options = PanelizeOptions::new(200).with_max_attempts(4);
    match panelize_contours(&blank, &NoiseDetector, &options) {
        Err(SegError::TooManyRegions { count, attempts }) => {
            rp.compare_values(3000.0, count as f64, 0.0);
            rp.compare_values(4.0, attempts as f64, 0.0);
        }
        other => {
            rp.compare_bool(false, "expected TooManyRegions");
            drop(other);
        }
    }

    // --- Test 4: both strategies agree through the page driver ---
    let by_contours = extract_panels(&two_square_page(), &PageOptions::new()).expect("contours");
    let by_gutters = extract_panels(
        &two_square_page(),
        &PageOptions::new().with_strategy(PanelStrategy::WhitespaceSplit),
    )
    .expect("gutters");
    rp.compare_values(2.0, by_contours.panels.len() as f64, 0.0);
    rp.compare_values(2.0, by_gutters.panels.len() as f64, 0.0);

    // --- Test 5: batch processing isolates pages ---
    let pages = vec![
        two_square_page(),
        Gray::filled(100, 100, 255).unwrap(),
        two_square_page(),
    ];
    let results = extract_panels_batch(&pages, &PageOptions::new());
    rp.compare_values(3.0, results.len() as f64, 0.0);
    rp.compare_values(
        2.0,
        results[0].as_ref().expect("page 0").panels.len() as f64,
        0.0,
    );
    rp.compare_values(
        0.0,
        results[1].as_ref().expect("page 1").panels.len() as f64,
        0.0,
    );
    rp.compare_values(
        2.0,
        results[2].as_ref().expect("page 2").panels.len() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "panelize regression test failed");
}

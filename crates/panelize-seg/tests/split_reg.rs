//! Split regression test
//!
//! Tests the whitespace-gutter splitter on synthetic page layouts:
//! decomposition of a panel grid, coverage of every ink pixel, leaf
//! disjointness, and blank-region handling.

use panelize_core::{Gray, Rect};
use panelize_seg::{SegError, split};
use panelize_test::RegParams;

const THRESHOLD: u8 = 200;

fn page_with(width: u32, height: u32, rects: &[Rect]) -> Gray {
    let mut g = Gray::filled(width, height, 255).unwrap();
    for r in rects {
        g.fill_rect(r, 0);
    }
    g
}

#[test]
fn split_reg() {
    let mut rp = RegParams::new("split");

    // --- Test 1: 2x3 grid decomposes into its six panels ---
    let mut grid = Vec::new();
    for row in 0..3 {
        for col in 0..2 {
            grid.push(Rect::new_unchecked(
                10 + col * 100,
                10 + row * 70,
                80,
                50,
            ));
        }
    }
    let page = page_with(220, 220, &grid);
    let panels = split(&page, THRESHOLD).expect("split grid");
    rp.compare_values(6.0, panels.len() as f64, 0.0);
    for r in &grid {
        rp.compare_bool(panels.contains(r), "grid panel recovered exactly");
    }

    // --- Test 2: every ink pixel is covered by exactly one leaf ---
    let layout = [
        Rect::new_unchecked(5, 5, 60, 25),
        Rect::new_unchecked(80, 5, 35, 45),
        Rect::new_unchecked(5, 60, 110, 30),
    ];
    let page = page_with(120, 100, &layout);
    let panels = split(&page, THRESHOLD).expect("split layout");

    let mut orphaned = 0u32;
    let mut doubly_covered = 0u32;
    for y in 0..100i32 {
        for x in 0..120i32 {
            if page.get_pixel_unchecked(x as u32, y as u32) < THRESHOLD {
                match panels.iter().filter(|p| p.contains_point(x, y)).count() {
                    0 => orphaned += 1,
                    1 => {}
                    _ => doubly_covered += 1,
                }
            }
        }
    }
    rp.compare_values(0.0, orphaned as f64, 0.0);
    rp.compare_values(0.0, doubly_covered as f64, 0.0);

    for (i, a) in panels.iter().enumerate() {
        for b in panels.iter().skip(i + 1) {
            rp.compare_bool(a.intersect(b).is_none(), "leaves are disjoint");
        }
    }

    // --- Test 3: an unsplittable region is returned tight-cropped ---
    let single = page_with(50, 50, &[Rect::new_unchecked(7, 9, 30, 20)]);
    let panels = split(&single, THRESHOLD).expect("split single");
    rp.compare_values(1.0, panels.len() as f64, 0.0);
    rp.compare_bool(
        panels[0] == Rect::new_unchecked(7, 9, 30, 20),
        "leaf equals the ink bounding box",
    );

    // --- Test 4: blank page raises EmptyRegion ---
    let blank = Gray::filled(40, 40, 255).unwrap();
    rp.compare_bool(
        matches!(split(&blank, THRESHOLD), Err(SegError::EmptyRegion { .. })),
        "blank page is an empty region",
    );

    assert!(rp.cleanup(), "split regression test failed");
}

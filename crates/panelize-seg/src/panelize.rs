//! Adaptive panel extraction
//!
//! Two selectable strategies produce the candidate set, sharing the
//! merger and sorter back end:
//!
//! - [`panelize_contours`] - contour detection under an escalating
//!   erosion schedule. Contour counts are very sensitive to erosion
//!   intensity: too little yields thousands of speckle contours, too
//!   much destroys real borders. The loop erodes harder until the
//!   merged candidate count falls below a stability bound, within a
//!   bounded attempt budget.
//! - [`panelize_split`] - self-contained whitespace-gutter recursion,
//!   no external detector involved.

use crate::error::{SegError, SegResult};
use crate::merge::merge;
use crate::sort::{DEFAULT_GRID, sort_panels};
use crate::split::split;
use panelize_core::{Gray, Rect};
use panelize_filter::{erode, gaussian_blur_3x3, threshold_binary};
use panelize_region::{ContourDetector, depth};
use tracing::{debug, warn};

/// Merged-candidate count above which the erosion schedule escalates
pub const DEFAULT_STABILITY_BOUND: usize = 1000;

/// Default cap on escalation attempts before giving up on a page
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Width of the white frame painted over the page edge
pub const FRAME_WIDTH: u32 = 5;

/// Contour bounding boxes thinner than this are speckle, not panels
const MIN_CANDIDATE_EDGE: i32 = 2;

/// Options for contour-based panel extraction
#[derive(Debug, Clone)]
pub struct PanelizeOptions {
    /// Binarization threshold separating ink from paper
    pub threshold: u8,

    /// Erosion structuring-element edge length (default: 2)
    pub kernel_size: u32,

    /// Starting erosion iteration count (default: 1)
    pub iterations: u32,

    /// Merged-candidate count that triggers escalation (default: 1000)
    pub stability_bound: usize,

    /// Maximum escalation attempts before failing the page (default: 8)
    pub max_attempts: u32,

    /// Reading-order grid granularity (default: 10)
    pub grid: u32,

    /// Drop panels whose width or height does not exceed this
    pub min_panel_size: Option<u32>,
}

impl Default for PanelizeOptions {
    fn default() -> Self {
        Self {
            threshold: 200,
            kernel_size: 2,
            iterations: 1,
            stability_bound: DEFAULT_STABILITY_BOUND,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            grid: DEFAULT_GRID,
            min_panel_size: None,
        }
    }
}

impl PanelizeOptions {
    /// Create options with the given binarization threshold
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the erosion kernel size
    pub fn with_kernel_size(mut self, kernel_size: u32) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    /// Set the starting erosion iteration count
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the stability bound
    pub fn with_stability_bound(mut self, bound: usize) -> Self {
        self.stability_bound = bound;
        self
    }

    /// Set the escalation attempt cap
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the reading-order grid granularity
    pub fn with_grid(mut self, grid: u32) -> Self {
        self.grid = grid;
        self
    }

    /// Set the minimum panel edge length
    pub fn with_min_panel_size(mut self, min: u32) -> Self {
        self.min_panel_size = Some(min);
        self
    }

    /// Validate options
    pub fn validate(&self) -> SegResult<()> {
        if self.kernel_size == 0 {
            return Err(SegError::InvalidParameter(
                "kernel_size must be at least 1".to_string(),
            ));
        }
        if self.stability_bound == 0 {
            return Err(SegError::InvalidParameter(
                "stability_bound must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(SegError::InvalidParameter(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.grid == 0 {
            return Err(SegError::InvalidParameter(
                "grid must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of contour-based panel extraction
///
/// Carries the erosion schedule actually used so callers can start the
/// next page of the same book from it.
#[derive(Debug, Clone)]
pub struct Panelization {
    /// Panels in reading order, page-absolute coordinates
    pub panels: Vec<Rect>,
    /// Erosion kernel size used
    pub kernel_size: u32,
    /// Erosion iteration count that converged
    pub iterations: u32,
}

/// Extract panels via contour detection with escalating erosion
///
/// Each attempt paints a white frame over the page edge (so the page
/// outline itself is never a panel), erodes, blurs, binarizes, and asks
/// the detector for contours. Only depth-one contours survive - direct
/// children of the page-level root - which discards nested sub-contours
/// (text, bubble interiors) along with the root itself. Their bounding
/// boxes are merged, and if the merged count still exceeds the
/// stability bound the erosion iteration count is raised and the
/// attempt repeated, kernel size held fixed.
///
/// # Errors
///
/// Returns [`SegError::TooManyRegions`] if `max_attempts` escalations
/// never converge below the bound.
pub fn panelize_contours<D: ContourDetector>(
    page: &Gray,
    detector: &D,
    options: &PanelizeOptions,
) -> SegResult<Panelization> {
    options.validate()?;

    let framed = page.framed(FRAME_WIDTH, 255);
    let mut iterations = options.iterations;
    let mut last_count = 0usize;

    for _ in 0..options.max_attempts {
        let eroded = erode(&framed, options.kernel_size, options.kernel_size, iterations)?;
        let smoothed = gaussian_blur_3x3(&eroded);
        let binary = threshold_binary(&smoothed, options.threshold);

        let contours = detector.find_contours(&binary)?;
        let candidates: Vec<Rect> = contours
            .iter()
            .enumerate()
            .filter(|&(i, _)| depth(&contours, i) == 1)
            .map(|(_, c)| c.bounds)
            .filter(|r| r.w >= MIN_CANDIDATE_EDGE && r.h >= MIN_CANDIDATE_EDGE)
            .collect();

        let merged = merge(&candidates);
        if merged.len() < options.stability_bound {
            debug!(
                panels = merged.len(),
                kernel_size = options.kernel_size,
                iterations,
                "panelization converged"
            );
            let kept = match options.min_panel_size {
                Some(min) => filter_min_size(merged, min),
                None => merged,
            };
            let panels = sort_panels(&kept, page.width(), page.height(), options.grid)?;
            return Ok(Panelization {
                panels,
                kernel_size: options.kernel_size,
                iterations,
            });
        }

        last_count = merged.len();
        warn!(
            regions = last_count,
            kernel_size = options.kernel_size,
            iterations,
            "too many candidate regions, escalating erosion"
        );
        iterations += 1;
    }

    Err(SegError::TooManyRegions {
        count: last_count,
        attempts: options.max_attempts,
    })
}

/// Extract panels via recursive whitespace splitting
///
/// The gutter strategy: erode to close hairline gaps in panel borders,
/// binarize, split at whitespace gutters, and sort. A blank page yields
/// zero panels rather than an error.
pub fn panelize_split(page: &Gray, threshold: u8, grid: u32) -> SegResult<Vec<Rect>> {
    let eroded = erode(page, 3, 3, 2)?;
    let binary = threshold_binary(&eroded, threshold);

    match split(&binary, threshold) {
        Ok(rects) => sort_panels(&rects, page.width(), page.height(), grid),
        Err(SegError::EmptyRegion { .. }) => {
            debug!(threshold, "page has no ink, zero panels");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Drop rectangles whose width or height does not exceed `min`
pub(crate) fn filter_min_size(panels: Vec<Rect>, min: u32) -> Vec<Rect> {
    panels
        .into_iter()
        .filter(|r| r.w > min as i32 && r.h > min as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelize_region::{ComponentContourDetector, Contour, RegionResult};

    fn two_square_page() -> Gray {
        let mut g = Gray::filled(400, 400, 255).unwrap();
        g.fill_rect(&Rect::new_unchecked(10, 10, 100, 100), 0);
        g.fill_rect(&Rect::new_unchecked(250, 250, 100, 100), 0);
        g
    }

    #[test]
    fn test_panelize_contours_two_squares() {
        let detector = ComponentContourDetector::default();
        let options = PanelizeOptions::new(200);
        let result = panelize_contours(&two_square_page(), &detector, &options).unwrap();

        assert_eq!(result.panels.len(), 2);
        // Erosion and blur move edges by a few pixels at most.
        let first = result.panels[0];
        let second = result.panels[1];
        assert!((first.x - 10).abs() <= 4 && (first.y - 10).abs() <= 4);
        assert!((first.w - 100).abs() <= 8 && (first.h - 100).abs() <= 8);
        assert!((second.x - 250).abs() <= 4 && (second.y - 250).abs() <= 4);
        assert_eq!(result.kernel_size, 2);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_panelize_contours_blank_page() {
        let g = Gray::filled(100, 100, 255).unwrap();
        let detector = ComponentContourDetector::default();
        let result = panelize_contours(&g, &detector, &PanelizeOptions::new(200)).unwrap();
        assert!(result.panels.is_empty());
    }

    #[test]
    fn test_panelize_contours_min_size_filter() {
        let mut g = two_square_page();
        // Speckle that survives erosion but is below the size floor.
        g.fill_rect(&Rect::new_unchecked(200, 30, 14, 14), 0);

        let detector = ComponentContourDetector::default();
        let options = PanelizeOptions::new(200).with_min_panel_size(40);
        let result = panelize_contours(&g, &detector, &options).unwrap();
        assert_eq!(result.panels.len(), 2);
    }

    /// Detector that always reports a pathological speckle field
    struct SpeckleDetector;

    impl ContourDetector for SpeckleDetector {
        fn find_contours(&self, _binary: &Gray) -> RegionResult<Vec<Contour>> {
            let mut contours = vec![Contour {
                bounds: Rect::new_unchecked(0, 0, 4000, 4000),
                parent: None,
            }];
            for i in 0..2000 {
                let x = (i % 50) * 80;
                let y = (i / 50) * 80;
                contours.push(Contour {
                    bounds: Rect::new_unchecked(x, y, 2, 2),
                    parent: Some(0),
                });
            }
            Ok(contours)
        }
    }

    #[test]
    fn test_panelize_contours_escalation_is_bounded() {
        let g = Gray::filled(64, 64, 255).unwrap();
        let options = PanelizeOptions::new(200).with_max_attempts(3);
        let result = panelize_contours(&g, &SpeckleDetector, &options);
        assert!(matches!(
            result,
            Err(SegError::TooManyRegions {
                count: 2000,
                attempts: 3
            })
        ));
    }

    /// Detector standing in for a failing external collaborator
    struct BrokenDetector;

    impl ContourDetector for BrokenDetector {
        fn find_contours(&self, _binary: &Gray) -> RegionResult<Vec<Contour>> {
            Err(panelize_region::RegionError::DetectionFailed(
                "collaborator unavailable".to_string(),
            ))
        }
    }

    #[test]
    fn test_panelize_contours_propagates_detector_failure() {
        let g = Gray::filled(32, 32, 255).unwrap();
        let result = panelize_contours(&g, &BrokenDetector, &PanelizeOptions::new(200));
        assert!(matches!(result, Err(SegError::Region(_))));
    }

    #[test]
    fn test_panelize_split_two_squares() {
        let panels = panelize_split(&two_square_page(), 200, DEFAULT_GRID).unwrap();
        assert_eq!(panels.len(), 2);
        assert!(panels[0].y < panels[1].y);
    }

    #[test]
    fn test_panelize_split_blank_page_is_zero_panels() {
        let g = Gray::filled(80, 80, 255).unwrap();
        assert!(panelize_split(&g, 200, DEFAULT_GRID).unwrap().is_empty());
    }

    #[test]
    fn test_options_validation() {
        assert!(PanelizeOptions::new(200).validate().is_ok());
        assert!(
            PanelizeOptions::new(200)
                .with_kernel_size(0)
                .validate()
                .is_err()
        );
        assert!(
            PanelizeOptions::new(200)
                .with_max_attempts(0)
                .validate()
                .is_err()
        );
        assert!(PanelizeOptions::new(200).with_grid(0).validate().is_err());
    }
}

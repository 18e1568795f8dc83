//! Per-page pipeline and batch driver
//!
//! Chains the pieces in the order a scanned book is processed: optional
//! contrast stretch, optional deskew, threshold selection, then one of
//! the two panel strategies. Pages are independent, so the batch driver
//! fans them out across a thread pool; one page failing never aborts
//! the rest.
//!
//! The binarization threshold is not hidden state: the caller passes
//! the previous page's threshold in as a hint and reads the computed
//! one back out of [`PageResult`], threading it forward explicitly.

use crate::error::{SegError, SegResult};
use crate::panelize::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_STABILITY_BOUND, PanelizeOptions, Panelization, filter_min_size,
    panelize_contours, panelize_split,
};
use crate::skew::correct_skew;
use crate::sort::DEFAULT_GRID;
use panelize_core::{Gray, Rect};
use panelize_filter::{adjust_contrast, auto_threshold};
use panelize_region::ComponentContourDetector;
use rayon::prelude::*;
use tracing::debug;

/// Candidate-producing strategy for a page
///
/// Both strategies share the merger and sorter back end; which one suits
/// a page is a policy decision left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStrategy {
    /// Recursive whitespace-gutter splitting; self-contained, best for
    /// clean pages with unbroken gutters
    WhitespaceSplit,
    /// Contour detection with escalating erosion; robust to fragmented
    /// borders and borderless art
    #[default]
    ContourMerge,
}

/// Options for the per-page pipeline
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Candidate strategy (default: contour merge)
    pub strategy: PanelStrategy,

    /// Deskew the page before geometry analysis (default: false)
    ///
    /// Worth enabling for black-and-white scans; the estimate keys off
    /// the minimum-area rectangle of all ink, so sparse synthetic
    /// layouts can report a diagonal orientation
    pub deskew: bool,

    /// Linear contrast stretch applied first, for faded scans
    pub contrast: Option<f32>,

    /// Starting point for the threshold search, typically the previous
    /// page's computed threshold
    pub threshold_hint: Option<u8>,

    /// Erosion kernel size for the contour strategy (default: 2)
    pub kernel_size: u32,

    /// Starting erosion iteration count (default: 1)
    pub iterations: u32,

    /// Candidate count that triggers erosion escalation (default: 1000)
    pub stability_bound: usize,

    /// Escalation attempt cap (default: 8)
    pub max_attempts: u32,

    /// Reading-order grid granularity (default: 10)
    pub grid: u32,

    /// Drop panels whose width or height does not exceed this
    pub min_panel_size: Option<u32>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            strategy: PanelStrategy::default(),
            deskew: false,
            contrast: None,
            threshold_hint: None,
            kernel_size: 2,
            iterations: 1,
            stability_bound: DEFAULT_STABILITY_BOUND,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            grid: DEFAULT_GRID,
            min_panel_size: None,
        }
    }
}

impl PageOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate strategy
    pub fn with_strategy(mut self, strategy: PanelStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable deskewing
    pub fn with_deskew(mut self, deskew: bool) -> Self {
        self.deskew = deskew;
        self
    }

    /// Set the contrast stretch factor
    pub fn with_contrast(mut self, alpha: f32) -> Self {
        self.contrast = Some(alpha);
        self
    }

    /// Set the threshold hint carried from the previous page
    pub fn with_threshold_hint(mut self, hint: u8) -> Self {
        self.threshold_hint = Some(hint);
        self
    }

    /// Set the minimum panel edge length
    pub fn with_min_panel_size(mut self, min: u32) -> Self {
        self.min_panel_size = Some(min);
        self
    }

    fn panelize_options(&self, threshold: u8) -> PanelizeOptions {
        PanelizeOptions {
            threshold,
            kernel_size: self.kernel_size,
            iterations: self.iterations,
            stability_bound: self.stability_bound,
            max_attempts: self.max_attempts,
            grid: self.grid,
            min_panel_size: self.min_panel_size,
        }
    }
}

/// Result of processing one page
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Panels in reading order, page-absolute coordinates
    pub panels: Vec<Rect>,

    /// Threshold computed for this page; pass it to the next page as
    /// [`PageOptions::threshold_hint`]
    pub threshold: u8,

    /// Erosion kernel size used
    pub kernel_size: u32,

    /// Erosion iteration count that converged
    pub iterations: u32,

    /// Deskew angle applied, `None` when deskewing was disabled or the
    /// page was blank
    pub skew_angle: Option<f32>,
}

/// Extract ordered panels from one page
///
/// Runs contrast adjustment, deskewing, threshold selection, and the
/// configured strategy. A blank page yields zero panels.
///
/// # Errors
///
/// [`SegError::TooManyRegions`] if the contour strategy's escalation
/// budget is exhausted; parameter validation errors from the underlying
/// passes. Blank pages are not an error at this level.
pub fn extract_panels(page: &Gray, options: &PageOptions) -> SegResult<PageResult> {
    let mut working = match options.contrast {
        Some(alpha) => adjust_contrast(page, alpha)?,
        None => page.clone(),
    };

    let mut skew_angle = None;
    if options.deskew {
        match correct_skew(&working) {
            Ok((rotated, angle)) => {
                working = rotated;
                skew_angle = Some(angle);
            }
            Err(SegError::EmptyRegion { .. }) => {
                debug!("page has no foreground, skipping deskew");
            }
            Err(e) => return Err(e),
        }
    }

    let threshold = auto_threshold(&working, options.threshold_hint);

    match options.strategy {
        PanelStrategy::ContourMerge => {
            let detector = ComponentContourDetector::default();
            let Panelization {
                panels,
                kernel_size,
                iterations,
            } = panelize_contours(&working, &detector, &options.panelize_options(threshold))?;
            Ok(PageResult {
                panels,
                threshold,
                kernel_size,
                iterations,
                skew_angle,
            })
        }
        PanelStrategy::WhitespaceSplit => {
            let panels = panelize_split(&working, threshold, options.grid)?;
            let panels = match options.min_panel_size {
                Some(min) => filter_min_size(panels, min),
                None => panels,
            };
            Ok(PageResult {
                panels,
                threshold,
                kernel_size: options.kernel_size,
                iterations: options.iterations,
                skew_angle,
            })
        }
    }
}

/// Extract panels from many pages in parallel
///
/// Pages share no state, so they are processed on the rayon thread
/// pool. Results come back in input order; each page carries its own
/// `Result`, so a pathological page surfaces its error without
/// affecting its neighbors.
pub fn extract_panels_batch(pages: &[Gray], options: &PageOptions) -> Vec<SegResult<PageResult>> {
    pages
        .par_iter()
        .map(|page| extract_panels(page, options))
        .collect()
}

//! Frame-to-angles orchestration.
use crate::angle::edge_angles;
use crate::edges::detect_edges;
use crate::image::ImageF32;
use crate::overlay::{Overlay, OverlayText};
use crate::types::{AngleTriple, Axis, FovResult};
use log::{debug, warn};
use std::time::Instant;

use super::params::{ConfigError, FovParams};

/// Measurement pipeline for one camera and one parameter set.
///
/// `process` takes the frame by mutable reference and destroys the pixels
/// inside the configured ignore rectangle before detection. Callers that
/// reuse capture buffers or need the pristine frame afterwards must pass a
/// copy.
pub struct FovDetector {
    params: FovParams,
}

impl FovDetector {
    /// Build a detector, failing fast on frame-independent parameter errors
    /// (band ordering, zero standoff).
    pub fn new(params: FovParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FovParams {
        &self.params
    }

    /// Process one frame into a two-axis angle measurement.
    ///
    /// Zeroes the ignore rectangle in place, locates the edge pairs of both
    /// axes inside the ROI, and maps them through calibration and the
    /// standoff geometry. When either axis finds no edges the result is
    /// fail-soft: `found == false` with all-zero triples.
    ///
    /// Fails only on configuration errors (ROI or ignore rectangle outside
    /// the frame), checked before any pixel is modified.
    pub fn process(&self, frame: &mut ImageF32) -> Result<FovResult, ConfigError> {
        self.params.validate_frame(frame.w, frame.h)?;
        let t0 = Instant::now();

        frame.fill_rect(&self.params.ignore, 0.0);
        let edges = detect_edges(
            frame,
            &self.params.roi,
            &self.params.band,
            self.params.min_brightness,
        );

        let result = match edges {
            Some(edges) => FovResult {
                found: true,
                x: edge_angles(edges.x, &self.params.calibration_x, self.params.standoff_mm),
                y: edge_angles(edges.y, &self.params.calibration_y, self.params.standoff_mm),
                edges: Some(edges),
                latency_ms: t0.elapsed().as_secs_f64() * 1e3,
            },
            None => {
                debug!("FovDetector::process no edges in frame");
                FovResult {
                    found: false,
                    latency_ms: t0.elapsed().as_secs_f64() * 1e3,
                    ..FovResult::default()
                }
            }
        };
        Ok(result)
    }

    /// Angle triple for a single axis, with the combined found flag.
    ///
    /// Detection always runs over both axes: a frame where only one axis has
    /// edges is still a failed detection, matching the combined flag
    /// semantics of `process`.
    pub fn measure_axis(
        &self,
        frame: &mut ImageF32,
        axis: Axis,
    ) -> Result<(AngleTriple, bool), ConfigError> {
        let result = self.process(frame)?;
        let triple = match axis {
            Axis::X => result.x,
            Axis::Y => result.y,
        };
        Ok((triple, result.found))
    }

    /// Process a frame and hand the formatted angle text to `overlay`.
    ///
    /// A rendering failure is logged and swallowed; it never fails the
    /// measurement.
    pub fn process_annotated(
        &self,
        frame: &mut ImageF32,
        overlay: &mut dyn Overlay,
    ) -> Result<FovResult, ConfigError> {
        let result = self.process(frame)?;
        let text = OverlayText::from_result(&result);
        if let Err(err) = overlay.render(frame, &text) {
            warn!("overlay rendering failed: {err}");
        }
        Ok(result)
    }
}

//! Threshold-band edge detection on intensity profiles.
//!
//! The normalized profile is tested against two independent fractional
//! intervals: the edge pair is the *first* index falling strictly inside the
//! low-side interval and the *last* index falling strictly inside the
//! high-side interval. No interpolation or sub-pixel refinement is applied.
//! A frame counts as detected only when both axes produced a pair.
use crate::detector::{PixelRect, ThresholdBand};
use crate::image::ImageF32;
use crate::types::{Axis, AxisEdges, EdgePair};
use log::debug;
use std::ops::Range;

/// Detect the edge pair of `frame` restricted to `rows × cols`, profiled
/// along `axis`.
///
/// Returns `None` when either interval matched no index — including the
/// dark-frame case where the profile never exceeded `min_brightness`.
pub fn edge_pair(
    frame: &ImageF32,
    rows: Range<usize>,
    cols: Range<usize>,
    axis: Axis,
    band: &ThresholdBand,
    min_brightness: f64,
) -> Option<EdgePair> {
    let mut profile = super::profile::mean_profile(frame, rows, cols, axis);
    super::profile::normalize_max(&mut profile, min_brightness);

    let in_interval = |v: f64, min: f64, max: f64| v > min && v < max;
    let low = profile
        .iter()
        .position(|&v| in_interval(v, band.low_min, band.low_max))?;
    let high = profile
        .iter()
        .rposition(|&v| in_interval(v, band.high_min, band.high_max))?;

    Some(EdgePair { low, high })
}

/// Region combiner: run edge detection for both axes of one frame.
///
/// The x detection profiles the row band `[roi.row_min, roi.row_max)` across
/// all columns; the y detection profiles the column band
/// `[roi.col_min, roi.col_max)` across all rows. Both pairs must be present
/// for the frame to count as detected.
pub fn detect_edges(
    frame: &ImageF32,
    roi: &PixelRect,
    band: &ThresholdBand,
    min_brightness: f64,
) -> Option<AxisEdges> {
    let x = edge_pair(
        frame,
        roi.row_min..roi.row_max,
        0..frame.w,
        Axis::X,
        band,
        min_brightness,
    );
    let y = edge_pair(
        frame,
        0..frame.h,
        roi.col_min..roi.col_max,
        Axis::Y,
        band,
        min_brightness,
    );
    debug!("detect_edges x={x:?} y={y:?}");

    match (x, y) {
        (Some(x), Some(y)) => Some(AxisEdges { x, y }),
        _ => None,
    }
}

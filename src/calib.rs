//! Per-axis calibration: pixel coordinate → physical length in millimetres.
//!
//! Calibration maps are pure and total over f64 — negative lengths are
//! meaningful (pixels before the optical origin) and flow straight into the
//! signed arctangent downstream. The defaults reproduce the evaluation-bench
//! fits for the two axes.
use serde::{Deserialize, Serialize};

/// A pixel → length map for one axis.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calibration {
    /// `length = gain * px + offset`
    Linear { gain: f64, offset: f64 },
    /// `length = a * px^2 + b * px + c`
    Quadratic { a: f64, b: f64, c: f64 },
    /// Piecewise-linear interpolation over `(px, length)` points sorted by
    /// pixel coordinate; clamped to the end segments outside the table.
    Lookup { points: Vec<[f64; 2]> },
}

impl Calibration {
    /// Bench fit for the horizontal axis.
    pub fn bench_x() -> Self {
        Calibration::Quadratic {
            a: 5e-6,
            b: 0.3703,
            c: -583.05,
        }
    }

    /// Bench fit for the vertical axis.
    pub fn bench_y() -> Self {
        Calibration::Linear {
            gain: 0.3825,
            offset: -388.46,
        }
    }

    /// Evaluate the map at pixel coordinate `px`.
    pub fn length_mm(&self, px: f64) -> f64 {
        match self {
            Calibration::Linear { gain, offset } => gain * px + offset,
            Calibration::Quadratic { a, b, c } => a * px * px + b * px + c,
            Calibration::Lookup { points } => lookup_interpolate(points, px),
        }
    }
}

fn lookup_interpolate(points: &[[f64; 2]], px: f64) -> f64 {
    match points {
        [] => 0.0,
        [only] => only[1],
        _ => {
            // Find the segment whose pixel range brackets px; end segments
            // extrapolate linearly so the map stays total.
            let last = points.len() - 1;
            let seg = points
                .windows(2)
                .position(|w| px < w[1][0])
                .unwrap_or(last - 1);
            let [x0, y0] = points[seg];
            let [x1, y1] = points[seg + 1];
            let span = x1 - x0;
            if span == 0.0 {
                y0
            } else {
                y0 + (y1 - y0) * (px - x0) / span
            }
        }
    }
}

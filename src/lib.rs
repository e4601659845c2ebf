#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod camera;
pub mod config;
pub mod detector;
pub mod image;
pub mod logging;
pub mod session;
pub mod types;

// Lower-level building blocks – public, but considered unstable internals.
pub mod angle;
pub mod average;
pub mod calib;
pub mod edges;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{ConfigError, FovDetector, FovParams, PixelRect, ThresholdBand};
pub use crate::types::{AngleTriple, FovResult, MeasurementVector};

// Session-level state machine.
pub use crate::average::RollingAverage;
pub use crate::logging::FovLog;
pub use crate::session::{MeasurementSession, SessionStep};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use fov_detector::prelude::*;
///
/// # fn main() -> Result<(), fov_detector::ConfigError> {
/// let detector = FovDetector::new(FovParams::default())?;
/// let mut frame = ImageF32::new(2048, 2048);
/// let result = detector.process(&mut frame)?;
/// println!("found={} x_width={:.2}", result.found, result.x.width);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::calib::Calibration;
    pub use crate::image::ImageF32;
    pub use crate::{FovDetector, FovParams, FovResult, MeasurementSession};
}

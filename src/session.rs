//! Per-frame measurement state machine: detector → rolling mean → log.
use crate::average::RollingAverage;
use crate::detector::{ConfigError, FovDetector};
use crate::image::ImageF32;
use crate::logging::FovLog;
use crate::types::{FovResult, MeasurementVector};
use log::error;
use std::path::Path;

/// Outcome of one session step.
#[derive(Clone, Debug)]
pub struct SessionStep {
    /// Raw per-frame measurement (check `found` before trusting the angles).
    pub result: FovResult,
    /// Rolling mean over the window after this frame, as appended to the log.
    pub smoothed: MeasurementVector,
}

/// One measurement session: a detector, its smoothing window, and the
/// append-only log. State is exclusively owned — a multi-camera setup runs
/// one session per camera.
pub struct MeasurementSession {
    detector: FovDetector,
    averager: RollingAverage,
    log: FovLog,
}

impl MeasurementSession {
    pub fn new(detector: FovDetector, average_depth: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            detector,
            averager: RollingAverage::new(average_depth)?,
            log: FovLog::new(),
        })
    }

    pub fn detector(&self) -> &FovDetector {
        &self.detector
    }

    pub fn log(&self) -> &FovLog {
        &self.log
    }

    /// Process one frame, fold it into the rolling window (a failed
    /// detection enters as a zero row), and append the smoothed vector to
    /// the log under `timestamp`.
    ///
    /// The frame is mutated in place (ignore-rectangle zeroing).
    pub fn step(
        &mut self,
        frame: &mut ImageF32,
        timestamp: impl Into<String>,
    ) -> Result<SessionStep, ConfigError> {
        let result = self.detector.process(frame)?;
        let sample = result.found.then(|| result.vector());
        let smoothed = self.averager.push(sample.as_ref());
        self.log.append(timestamp, smoothed);
        Ok(SessionStep { result, smoothed })
    }

    /// Flush the log to `path`.
    ///
    /// A write failure is reported via `log::error!` and swallowed; the
    /// in-memory log is left intact and appendable, so the session can
    /// continue and retry later. Returns whether the write succeeded.
    pub fn flush(&self, path: &Path) -> bool {
        match self.log.write_csv(path) {
            Ok(()) => true,
            Err(err) => {
                error!("failed to flush measurement log: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calib::Calibration;
    use crate::detector::{FovParams, PixelRect, ThresholdBand};
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    fn session() -> MeasurementSession {
        let params = FovParams {
            calibration_x: Calibration::Linear {
                gain: 1.0,
                offset: -10.0,
            },
            calibration_y: Calibration::Linear {
                gain: 1.0,
                offset: -10.0,
            },
            standoff_mm: 100.0,
            ignore: PixelRect::new(0, 1, 0, 1),
            roi: PixelRect::new(8, 12, 8, 12),
            band: ThresholdBand::default(),
            min_brightness: 15.0,
        };
        MeasurementSession::new(FovDetector::new(params).unwrap(), 5).unwrap()
    }

    fn cross_frame() -> ImageF32 {
        let mut img = ImageF32::new(20, 20);
        for y in 8..12 {
            img.set(5, y, 128.0);
            for x in 6..15 {
                img.set(x, y, 255.0);
            }
            img.set(15, y, 128.0);
        }
        for x in 8..12 {
            img.set(x, 5, 128.0);
            for y in 6..15 {
                img.set(x, y, 255.0);
            }
            img.set(x, 15, 128.0);
        }
        img
    }

    #[test]
    fn repeated_frames_converge_to_the_raw_measurement() {
        let mut session = session();
        let mut last = None;
        for i in 0..5 {
            let step = session.step(&mut cross_frame(), format!("t{i}")).unwrap();
            assert!(step.result.found);
            last = Some(step);
        }
        let step = last.unwrap();
        for c in 0..6 {
            assert_relative_eq!(step.smoothed[c], step.result.vector()[c]);
        }
        assert_eq!(session.log().len(), 5);
    }

    #[test]
    fn dark_frame_shifts_the_window_by_a_zero_row() {
        let mut session = session();
        let mut saturated = MeasurementVector::zeros();
        for i in 0..5 {
            saturated = session
                .step(&mut cross_frame(), format!("t{i}"))
                .unwrap()
                .smoothed;
        }
        let step = session.step(&mut ImageF32::new(20, 20), "t5").unwrap();
        assert!(!step.result.found);
        for c in 0..6 {
            assert_relative_eq!(step.smoothed[c], saturated[c] * 4.0 / 5.0);
        }
    }

    #[test]
    fn flush_failure_keeps_the_session_usable() {
        let mut session = session();
        session.step(&mut cross_frame(), "t0").unwrap();
        assert!(!session.flush(&PathBuf::from("/nonexistent-dir/out.csv")));
        assert_eq!(session.log().len(), 1);
        session.step(&mut cross_frame(), "t1").unwrap();
        assert_eq!(session.log().len(), 2);
    }
}

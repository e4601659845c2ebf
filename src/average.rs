//! Fixed-depth rolling mean over measurement vectors.
use crate::detector::ConfigError;
use crate::types::MeasurementVector;
use nalgebra::DMatrix;

/// Sliding window of the last `depth` measurement vectors, oldest first.
///
/// The buffer starts zero-initialized and every push shifts it up by one
/// row, so for the first `depth - 1` pushes the reported mean is diluted by
/// the remaining zero rows. This warm-up behavior is deliberate (missing
/// history reads as "no signal") and tests pin it. A failed detection is
/// pushed as an all-zero row rather than skipped, pulling the mean towards
/// zero for the next `depth` steps.
#[derive(Clone, Debug)]
pub struct RollingAverage {
    buf: DMatrix<f64>,
    depth: usize,
}

impl RollingAverage {
    /// Create a zero-initialized window of `depth` rows.
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self {
            buf: DMatrix::zeros(depth, 6),
            depth,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Shift the window by one row, insert `sample` (or a zero row for a
    /// failed detection) as the newest entry, and return the column-wise
    /// mean over the whole window.
    pub fn push(&mut self, sample: Option<&MeasurementVector>) -> MeasurementVector {
        for r in 1..self.depth {
            let row = self.buf.row(r).into_owned();
            self.buf.set_row(r - 1, &row);
        }
        let newest = self.depth - 1;
        match sample {
            Some(v) => {
                for (c, &value) in v.iter().enumerate() {
                    self.buf[(newest, c)] = value;
                }
            }
            None => self.buf.row_mut(newest).fill(0.0),
        }
        self.mean()
    }

    /// Column-wise mean of the current window contents.
    pub fn mean(&self) -> MeasurementVector {
        MeasurementVector::from_iterator(self.buf.row_mean().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(v: f64) -> MeasurementVector {
        MeasurementVector::from_element(v)
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(RollingAverage::new(0).is_err());
    }

    #[test]
    fn fresh_window_reports_zero() {
        let avg = RollingAverage::new(5).unwrap();
        assert_eq!(avg.mean(), MeasurementVector::zeros());
    }

    #[test]
    fn warmup_mean_is_diluted_by_zero_rows() {
        let mut avg = RollingAverage::new(5).unwrap();
        let out = avg.push(Some(&sample(10.0)));
        // one real row over five total: no warm-up gating
        assert_relative_eq!(out[0], 2.0);
        let out = avg.push(Some(&sample(10.0)));
        assert_relative_eq!(out[0], 4.0);
    }

    #[test]
    fn steady_state_converges_to_the_sample() {
        let mut avg = RollingAverage::new(5).unwrap();
        let v = sample(3.5);
        let mut out = MeasurementVector::zeros();
        for _ in 0..5 {
            out = avg.push(Some(&v));
        }
        for c in 0..6 {
            assert_relative_eq!(out[c], 3.5);
        }
    }

    #[test]
    fn one_dropout_removes_exactly_one_share() {
        let depth = 4;
        let mut avg = RollingAverage::new(depth).unwrap();
        let v = sample(8.0);
        for _ in 0..depth {
            avg.push(Some(&v));
        }
        let out = avg.push(None);
        // v - v/depth
        assert_relative_eq!(out[0], 6.0);
        assert_relative_eq!(out[5], 6.0);
    }

    #[test]
    fn oldest_row_is_discarded_not_wrapped() {
        let mut avg = RollingAverage::new(2).unwrap();
        avg.push(Some(&sample(100.0)));
        avg.push(Some(&sample(2.0)));
        let out = avg.push(Some(&sample(4.0)));
        // window is now [2, 4]; the 100 must be gone
        assert_relative_eq!(out[0], 3.0);
    }

    #[test]
    fn depth_one_window_tracks_the_newest_sample() {
        let mut avg = RollingAverage::new(1).unwrap();
        let out = avg.push(Some(&sample(7.0)));
        assert_relative_eq!(out[0], 7.0);
        let out = avg.push(None);
        assert_relative_eq!(out[0], 0.0);
    }
}

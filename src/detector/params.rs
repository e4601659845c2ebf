//! Parameter types configuring the measurement pipeline.
//!
//! All knobs travel as an explicit [`FovParams`] value handed to the
//! detector — there is no process-wide default state. Defaults reproduce the
//! evaluation-bench rig setup.
use crate::calib::Calibration;
use serde::Deserialize;
use thiserror::Error;

/// Rectangular pixel region as half-open row/column bounds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct PixelRect {
    pub row_min: usize,
    pub row_max: usize,
    pub col_min: usize,
    pub col_max: usize,
}

impl PixelRect {
    pub fn new(row_min: usize, row_max: usize, col_min: usize, col_max: usize) -> Self {
        Self {
            row_min,
            row_max,
            col_min,
            col_max,
        }
    }
}

/// Fractional intensity intervals against which a normalized profile is
/// tested: `(low_min, low_max)` selects low-side candidates, `(high_min,
/// high_max)` high-side candidates. The two intervals are independent.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdBand {
    pub low_min: f64,
    pub low_max: f64,
    pub high_min: f64,
    pub high_max: f64,
}

impl Default for ThresholdBand {
    fn default() -> Self {
        Self {
            low_min: 0.2,
            low_max: 0.8,
            high_min: 0.2,
            high_max: 0.8,
        }
    }
}

/// Configuration failure raised before any pixel is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("threshold band {name} must satisfy 0 <= min < max <= 1, got ({min}, {max})")]
    InvalidBand {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{name} rows {row_min}..{row_max} are not an increasing range within height {height}")]
    InvalidRows {
        name: &'static str,
        row_min: usize,
        row_max: usize,
        height: usize,
    },
    #[error("{name} cols {col_min}..{col_max} are not an increasing range within width {width}")]
    InvalidCols {
        name: &'static str,
        col_min: usize,
        col_max: usize,
        width: usize,
    },
    #[error("standoff distance must be non-zero")]
    ZeroStandoff,
    #[error("rolling average depth must be at least 1")]
    ZeroDepth,
}

/// Detector-wide parameters for one measurement session.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FovParams {
    /// Pixel → length calibration for the horizontal axis.
    pub calibration_x: Calibration,
    /// Pixel → length calibration for the vertical axis.
    pub calibration_y: Calibration,
    /// Distance between the measurement plane and the mirror, millimetres.
    pub standoff_mm: f64,
    /// Rectangle zeroed in the frame before detection (artifact suppression).
    pub ignore: PixelRect,
    /// Region of interest selecting the x row band and the y column band.
    pub roi: PixelRect,
    /// Fractional intensity intervals for edge pairing.
    pub band: ThresholdBand,
    /// Profile maxima at or below this value are treated as a dark frame.
    pub min_brightness: f64,
}

impl Default for FovParams {
    fn default() -> Self {
        Self {
            calibration_x: Calibration::bench_x(),
            calibration_y: Calibration::bench_y(),
            standoff_mm: 400.0,
            ignore: PixelRect::new(900, 1110, 1410, 1650),
            roi: PixelRect::new(1010, 1020, 1525, 1535),
            band: ThresholdBand::default(),
            min_brightness: 15.0,
        }
    }
}

impl FovParams {
    /// Frame-independent invariants, checked when the detector is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_interval("low-side", self.band.low_min, self.band.low_max)?;
        check_interval("high-side", self.band.high_min, self.band.high_max)?;
        if self.standoff_mm == 0.0 {
            return Err(ConfigError::ZeroStandoff);
        }
        Ok(())
    }

    /// Frame-dependent bounds, checked against each processed frame.
    pub fn validate_frame(&self, width: usize, height: usize) -> Result<(), ConfigError> {
        check_rect("roi", &self.roi, width, height)?;
        check_rect("ignore region", &self.ignore, width, height)?;
        Ok(())
    }
}

fn check_interval(name: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if !(0.0..1.0).contains(&min) || max > 1.0 || min >= max {
        return Err(ConfigError::InvalidBand { name, min, max });
    }
    Ok(())
}

fn check_rect(
    name: &'static str,
    rect: &PixelRect,
    width: usize,
    height: usize,
) -> Result<(), ConfigError> {
    if rect.row_min >= rect.row_max || rect.row_max > height {
        return Err(ConfigError::InvalidRows {
            name,
            row_min: rect.row_min,
            row_max: rect.row_max,
            height,
        });
    }
    if rect.col_min >= rect.col_max || rect.col_max > width {
        return Err(ConfigError::InvalidCols {
            name,
            col_min: rect.col_min,
            col_max: rect.col_max,
            width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        let params = FovParams::default();
        params.validate().unwrap();
        params.validate_frame(2048, 2048).unwrap();
    }

    #[test]
    fn inverted_band_is_rejected() {
        let params = FovParams {
            band: ThresholdBand {
                low_min: 0.8,
                low_max: 0.2,
                ..ThresholdBand::default()
            },
            ..FovParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidBand { name: "low-side", .. })
        ));
    }

    #[test]
    fn band_above_one_is_rejected() {
        let params = FovParams {
            band: ThresholdBand {
                high_max: 1.5,
                ..ThresholdBand::default()
            },
            ..FovParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn zero_standoff_is_rejected() {
        let params = FovParams {
            standoff_mm: 0.0,
            ..FovParams::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::ZeroStandoff)));
    }

    #[test]
    fn roi_outside_the_frame_fails_fast() {
        let params = FovParams::default();
        // default ROI rows end at 1020: too tall for a 1000-row frame
        let err = params.validate_frame(2048, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRows { name: "roi", .. }));
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: FovParams = serde_json::from_str(r#"{"standoff_mm": 1020.0}"#).unwrap();
        assert_eq!(params.standoff_mm, 1020.0);
        assert_eq!(params.min_brightness, 15.0);
        assert_eq!(params.band, ThresholdBand::default());
    }
}

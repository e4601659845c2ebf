//! Length-to-angle conversion for the standoff geometry.
//!
//! A physical length on the measurement plane and the standoff distance to
//! the deflecting mirror form a right triangle; the deflection angle is its
//! arctangent. Lengths may be negative (pixels before the optical origin),
//! giving signed angles.
use crate::calib::Calibration;
use crate::types::{AngleTriple, EdgePair};

/// Deflection angle in degrees for a length on the measurement plane at
/// `standoff_mm` from the mirror.
#[inline]
pub fn length_to_angle_deg(length_mm: f64, standoff_mm: f64) -> f64 {
    (length_mm / standoff_mm).atan().to_degrees()
}

/// Map an edge pair through the axis calibration and the standoff geometry.
///
/// The width component is the signed difference of the two absolute angles,
/// not an independent trig evaluation, so it can never drift from them by
/// rounding.
pub fn edge_angles(edges: EdgePair, calib: &Calibration, standoff_mm: f64) -> AngleTriple {
    let low = length_to_angle_deg(calib.length_mm(edges.low as f64), standoff_mm);
    let high = length_to_angle_deg(calib.length_mm(edges.high as f64), standoff_mm);
    AngleTriple::new(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_is_signed_arctangent_in_degrees() {
        assert_relative_eq!(length_to_angle_deg(0.0, 1000.0), 0.0);
        assert_relative_eq!(
            length_to_angle_deg(1000.0, 1000.0),
            45.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            length_to_angle_deg(-10.0, 1000.0),
            -0.5729,
            epsilon = 1e-3
        );
    }

    #[test]
    fn triple_width_matches_difference_exactly() {
        let calib = Calibration::Linear {
            gain: 1.0,
            offset: -960.0,
        };
        let t = edge_angles(EdgePair { low: 950, high: 970 }, &calib, 1000.0);
        assert_eq!(t.width, t.high - t.low);
        assert_relative_eq!(t.low, -0.5729, epsilon = 1e-3);
        assert_relative_eq!(t.high, 0.5729, epsilon = 1e-3);
        assert_relative_eq!(t.width, 1.1458, epsilon = 1e-3);
    }

    #[test]
    fn negative_lengths_give_negative_angles() {
        let calib = Calibration::bench_y();
        // px = 0 → length = -388.46 mm
        let t = edge_angles(EdgePair { low: 0, high: 0 }, &calib, 400.0);
        assert!(t.low < 0.0);
        assert_eq!(t.width, 0.0);
    }
}

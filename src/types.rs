use nalgebra::SVector;
use serde::Serialize;

/// Six-component measurement in fixed order:
/// `(x_low, x_high, x_width, y_low, y_high, y_width)`.
pub type MeasurementVector = SVector<f64, 6>;

/// Which image axis an intensity profile runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Axis {
    /// Rows are averaged down to a per-column profile (horizontal edges).
    X,
    /// Columns are averaged down to a per-row profile (vertical edges).
    Y,
}

/// First and last pixel index of a detected band along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EdgePair {
    /// First index whose normalized intensity falls inside the low-side band.
    pub low: usize,
    /// Last index whose normalized intensity falls inside the high-side band.
    pub high: usize,
}

/// Edge pairs for both axes of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AxisEdges {
    pub x: EdgePair,
    pub y: EdgePair,
}

/// Signed deflection angles for one axis, in degrees.
///
/// `width` is always `high - low` by construction, never recomputed through
/// a separate trig call, so the three components stay mutually consistent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AngleTriple {
    pub low: f64,
    pub high: f64,
    pub width: f64,
}

impl AngleTriple {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            width: high - low,
        }
    }
}

/// Result of processing one frame.
///
/// `found == false` means one or both edge bands were missing; the triples
/// are then all zeros. The zeros are a fail-soft placeholder, not a real
/// measurement, so consumers must check `found` before trusting them.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FovResult {
    pub found: bool,
    pub x: AngleTriple,
    pub y: AngleTriple,
    /// Pixel edges backing the triples; `None` when detection failed.
    pub edges: Option<AxisEdges>,
    pub latency_ms: f64,
}

impl FovResult {
    /// Flatten into the fixed six-component measurement order.
    pub fn vector(&self) -> MeasurementVector {
        MeasurementVector::from_column_slice(&[
            self.x.low,
            self.x.high,
            self.x.width,
            self.y.low,
            self.y.high,
            self.y.width,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_width_is_signed_difference() {
        let t = AngleTriple::new(-0.5, 0.7);
        assert_eq!(t.width, t.high - t.low);

        let inverted = AngleTriple::new(0.7, -0.5);
        assert!(inverted.width < 0.0);
    }

    #[test]
    fn vector_order_is_x_triple_then_y_triple() {
        let r = FovResult {
            found: true,
            x: AngleTriple::new(1.0, 2.0),
            y: AngleTriple::new(-3.0, 3.0),
            edges: None,
            latency_ms: 0.0,
        };
        let v = r.vector();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 1.0, -3.0, 3.0, 6.0]);
    }
}

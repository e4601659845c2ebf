//! Annotation seam: formatted angle text handed to an external renderer.
//!
//! The core only produces the text; glyph drawing belongs to the display
//! collaborator behind the [`Overlay`] trait. Renderer failures are reported
//! by the detector via `log::warn!` and never fail a measurement.
use crate::image::ImageF32;
use crate::types::FovResult;

/// The two annotation lines for one frame, components formatted to one
/// decimal place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayText {
    pub x_line: String,
    pub y_line: String,
}

impl OverlayText {
    pub fn from_result(result: &FovResult) -> Self {
        Self {
            x_line: format!(
                "X_angle = {:.1}, {:.1}, {:.1}",
                result.x.low, result.x.high, result.x.width
            ),
            y_line: format!(
                "Y_angle = {:.1}, {:.1}, {:.1}",
                result.y.low, result.y.high, result.y.width
            ),
        }
    }
}

/// External annotation renderer.
pub trait Overlay {
    fn render(&mut self, frame: &mut ImageF32, text: &OverlayText) -> Result<(), String>;
}

/// Renderer that draws nothing; used when no display is attached.
pub struct NullOverlay;

impl Overlay for NullOverlay {
    fn render(&mut self, _frame: &mut ImageF32, _text: &OverlayText) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AngleTriple;

    #[test]
    fn text_formats_six_components_to_one_decimal() {
        let result = FovResult {
            found: true,
            x: AngleTriple::new(-0.5729, 0.5729),
            y: AngleTriple::new(-1.25, 1.25),
            edges: None,
            latency_ms: 0.0,
        };
        let text = OverlayText::from_result(&result);
        assert_eq!(text.x_line, "X_angle = -0.6, 0.6, 1.1");
        assert_eq!(text.y_line, "Y_angle = -1.2, 1.2, 2.5");
    }
}

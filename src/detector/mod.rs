//! Measurement pipeline turning one frame into a two-axis angle result.
//!
//! Overview
//! - Validates the parameter set against the frame, then zeroes the ignore
//!   rectangle in place (destructive — see [`FovDetector::process`]).
//! - Profiles the ROI row band per column and the ROI column band per row,
//!   pairing edges against the fractional threshold band.
//! - Maps edge indices through the per-axis calibration and the standoff
//!   arctangent into signed degree triples.
//! - Missing edges on either axis fail soft: a zero result carrying
//!   `found == false`.
//!
//! Modules
//! - [`params`] – configuration types and fail-fast validation.
//! - `pipeline` – the [`FovDetector`] implementation.
pub mod params;
mod pipeline;

pub use params::{ConfigError, FovParams, PixelRect, ThresholdBand};
pub use pipeline::FovDetector;

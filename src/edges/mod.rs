//! Intensity-profile edge detection.
//!
//! - [`profile`] – region averaging and max-normalization.
//! - [`detect`] – threshold-band edge pairing and the two-axis combiner.
pub mod detect;
pub mod profile;

pub use detect::{detect_edges, edge_pair};
pub use profile::{mean_profile, normalize_max};

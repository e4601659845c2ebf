//! Mean-intensity profiles of a frame region.
//!
//! A profile collapses a pixel rectangle into one value per column
//! ([`Axis::X`]) or per row ([`Axis::Y`]) by averaging along the other
//! dimension. Profiles are normalized against their maximum before
//! thresholding; frames whose profile never exceeds the brightness floor are
//! flattened to all-zero so a dark frame can never produce edges.
use crate::image::ImageF32;
use crate::types::Axis;
use std::ops::Range;

/// Average the region `rows × cols` of `frame` down to a 1-D profile.
///
/// For [`Axis::X`] the result has one entry per column in `cols`; for
/// [`Axis::Y`] one entry per row in `rows`. Empty ranges yield an empty
/// profile.
pub fn mean_profile(frame: &ImageF32, rows: Range<usize>, cols: Range<usize>, axis: Axis) -> Vec<f64> {
    let n_rows = rows.end.saturating_sub(rows.start);
    let n_cols = cols.end.saturating_sub(cols.start);
    if n_rows == 0 || n_cols == 0 {
        return Vec::new();
    }

    match axis {
        Axis::X => {
            let mut sums = vec![0.0f64; n_cols];
            for y in rows {
                let row = &frame.row(y)[cols.clone()];
                for (sum, &px) in sums.iter_mut().zip(row) {
                    *sum += px as f64;
                }
            }
            let denom = n_rows as f64;
            sums.iter_mut().for_each(|s| *s /= denom);
            sums
        }
        Axis::Y => {
            let denom = n_cols as f64;
            rows.map(|y| {
                let row = &frame.row(y)[cols.clone()];
                row.iter().map(|&px| px as f64).sum::<f64>() / denom
            })
            .collect()
        }
    }
}

/// Normalize `profile` by its maximum, in place.
///
/// Returns `true` if the maximum exceeded `min_brightness`. Otherwise the
/// profile is zeroed out and `false` is returned — the dark-frame guard from
/// the bench procedure.
pub fn normalize_max(profile: &mut [f64], min_brightness: f64) -> bool {
    let max = profile.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > min_brightness {
        profile.iter_mut().for_each(|v| *v /= max);
        true
    } else {
        profile.iter_mut().for_each(|v| *v = 0.0);
        false
    }
}

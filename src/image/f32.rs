//! Owned single-channel f32 frame in row-major layout (stride == width).
//!
//! Intensity values follow the 8-bit camera range (0–255) as floats, which
//! keeps profile averaging exact before normalization. The buffer is the
//! mutable working copy of a captured frame: the detector zeroes the
//! configured ignore rectangle in place, so callers that need the pristine
//! frame must clone before processing.
use crate::detector::PixelRect;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Frame width in pixels
    pub w: usize,
    /// Frame height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized frame of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Panics if `data` is not `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer size must match dimensions");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Convert an 8-bit grayscale buffer into the float working range.
    pub fn from_luma8(w: usize, h: usize, data: &[u8]) -> Self {
        assert_eq!(data.len(), w * h, "buffer size must match dimensions");
        Self {
            w,
            h,
            stride: w,
            data: data.iter().map(|&v| v as f32).collect(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice of `w` pixels.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Borrow row `y` mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Overwrite every pixel inside `rect` with `value`.
    ///
    /// Used to suppress known artifacts before edge detection. The rect must
    /// lie within the frame; the detector validates this before calling.
    pub fn fill_rect(&mut self, rect: &PixelRect, value: f32) {
        for y in rect.row_min..rect.row_max {
            let row = self.row_mut(y);
            for px in &mut row[rect.col_min..rect.col_max] {
                *px = value;
            }
        }
    }
}

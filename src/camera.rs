//! Camera interface boundary.
//!
//! The pipeline consumes exactly two operations from an acquisition device:
//! grab the next frame and stop streaming. Everything else a vendor SDK
//! offers (exposure, gain, trigger, AOI) stays behind this trait in the
//! acquisition layer. Sources carry a stable string identifier so sessions
//! select cameras by configured role, not by a hard-coded device number.
use crate::image::{io, ImageF32};
use std::collections::VecDeque;
use std::path::PathBuf;

/// A source of frames for one measurement session.
pub trait FrameSource {
    /// Stable identifier used to match a source against session config.
    fn id(&self) -> &str;

    /// Grab the next frame. Errors are acquisition failures, including an
    /// exhausted replay.
    fn capture(&mut self) -> Result<ImageF32, String>;

    /// Stop streaming and release the device.
    fn stop(&mut self) -> Result<(), String>;
}

/// Frame source replaying image files from disk, in order.
///
/// Stands in for a live camera in offline runs and tests; files are decoded
/// lazily on `capture`.
pub struct ReplaySource {
    id: String,
    queue: VecDeque<PathBuf>,
}

impl ReplaySource {
    pub fn new(id: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        Self {
            id: id.into(),
            queue: paths.into(),
        }
    }

    /// Frames left to replay.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl FrameSource for ReplaySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn capture(&mut self) -> Result<ImageF32, String> {
        let path = self
            .queue
            .pop_front()
            .ok_or_else(|| "replay exhausted: no frames left".to_string())?;
        io::load_frame(&path)
    }

    fn stop(&mut self) -> Result<(), String> {
        self.queue.clear();
        Ok(())
    }
}

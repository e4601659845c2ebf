use crate::detector::FovParams;
use crate::logging::DEFAULT_LOG_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the logging-session tool.
#[derive(Debug, Deserialize)]
pub struct SessionToolConfig {
    /// Frames replayed in order, one per step.
    pub inputs: Vec<PathBuf>,
    /// Identifier of the frame source this session is allowed to consume.
    pub camera: String,
    #[serde(default)]
    pub params: FovParams,
    /// Rolling-average window depth.
    #[serde(default = "default_average_depth")]
    pub average_depth: usize,
    /// Destination of the flushed CSV log.
    #[serde(default = "default_output_csv")]
    pub output_csv: PathBuf,
}

fn default_average_depth() -> usize {
    5
}

fn default_output_csv() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

pub fn load_config(path: &Path) -> Result<SessionToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

use crate::detector::FovParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the single-frame measurement tool.
#[derive(Debug, Deserialize)]
pub struct FrameToolConfig {
    /// Input image to measure.
    pub input: PathBuf,
    #[serde(default)]
    pub params: FovParams,
    pub output: FrameOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FrameOutputConfig {
    /// Destination for the JSON measurement summary.
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Optional destination for the processed (masked) frame.
    #[serde(default)]
    pub processed_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<FrameToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

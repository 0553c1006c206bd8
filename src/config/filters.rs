use crate::pipeline::FilterOp;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON run description for the `filter_demo` tool.
///
/// ```json
/// {
///   "input": "photo.png",
///   "premultiplied_alpha": false,
///   "filters": [{"op": "rotate", "angle_deg": 15.0}, {"op": "sepia"}],
///   "output": {"image": "out/photo.png", "report_json": "out/report.json"}
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct FilterToolConfig {
    pub input: PathBuf,
    /// Load the input as RGBA (premultiplied layout) instead of RGB.
    #[serde(default)]
    pub premultiplied_alpha: bool,
    #[serde(default)]
    pub filters: Vec<FilterOp>,
    pub output: FilterOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FilterOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<FilterToolConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

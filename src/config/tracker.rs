use crate::estimator::TrackerParams;
use crate::overlay::OverlayStyle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the batch tool writes its results.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Per-frame poses as pretty JSON; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Directory receiving one annotated PNG per frame.
    pub overlay_dir: Option<PathBuf>,
    /// Include stage timings and blob summaries in the JSON.
    #[serde(default)]
    pub diagnostics: bool,
}

/// Batch tool configuration: one frame per input image.
#[derive(Clone, Debug, Deserialize)]
pub struct TrackerConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub tracker: TrackerParams,
    #[serde(default)]
    pub overlay: OverlayStyle,
    #[serde(default)]
    pub output: OutputConfig,
    /// Flatten a static background before estimation: the per-pixel maximum
    /// over all inputs is subtracted from every frame.
    #[serde(default)]
    pub subtract_background: bool,
}

impl TrackerConfig {
    /// Resolves relative input and output paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.inputs = self.inputs.into_iter().map(join).collect();
        self.output.json_out = self.output.json_out.map(join);
        self.output.overlay_dir = self.output.overlay_dir.map(join);
        self
    }
}

pub fn load_config(path: &Path) -> Result<TrackerConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: TrackerConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}

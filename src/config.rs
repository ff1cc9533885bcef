use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "solver-compare.json";

/// Viewer settings. The physical constants are fixed and not part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Directory containing the solver output files.
    #[serde(default = "ViewerConfig::default_input_dir")]
    pub input_dir: PathBuf,
    /// Initial window size in points.
    #[serde(default = "ViewerConfig::default_window_size")]
    pub window_size: [f32; 2],
    #[serde(default = "ViewerConfig::default_line_width")]
    pub line_width: f32,
}

impl ViewerConfig {
    fn default_input_dir() -> PathBuf {
        PathBuf::from(".")
    }
    fn default_window_size() -> [f32; 2] {
        [1200.0, 800.0]
    }
    fn default_line_width() -> f32 {
        1.5
    }

    /// Read `path` if it exists. A broken file is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(cfg) => {
                    log::info!("loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    log::warn!(
                        "failed to parse config {}: {err}. Using defaults.",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "failed to read config {}: {err}. Using defaults.",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            input_dir: Self::default_input_dir(),
            window_size: Self::default_window_size(),
            line_width: Self::default_line_width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: ViewerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
        assert_eq!(cfg.input_dir, PathBuf::from("."));
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg: ViewerConfig =
            serde_json::from_str(r#"{ "input_dir": "runs/dt3ms", "line_width": 2.0 }"#).unwrap();
        assert_eq!(cfg.input_dir, PathBuf::from("runs/dt3ms"));
        assert_eq!(cfg.line_width, 2.0);
        assert_eq!(cfg.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("solver-compare-no-such-config.json");
        assert_eq!(ViewerConfig::load_or_default(&path), ViewerConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!(
            "solver-compare-{}-bad-config.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ViewerConfig::load_or_default(&path), ViewerConfig::default());
        fs::remove_file(&path).unwrap();
    }
}

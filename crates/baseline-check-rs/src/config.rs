//! Configuration loading.

use camino::Utf8Path;
use serde::Deserialize;
use std::fs;

const DEFAULT_EXTENSIONS: &[&str] = &[".css", ".scss", ".html", ".js", ".ts"];

/// Scan configuration, read from baseline-check.json at the workspace root.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckConfig {
    /// Root font size used for px to rem suggestions.
    pub rem_base: f64,

    /// Browser named in fallback suggestions.
    pub reference_browser: String,

    /// File extensions to scan.
    pub extensions: Vec<String>,

    /// Files/patterns to exclude.
    pub ignore: Vec<String>,

    /// Delay between scanned lines, in milliseconds.
    pub pacing_ms: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rem_base: 16.0,
            reference_browser: "safari".to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore: Vec::new(),
            pacing_ms: 0,
        }
    }
}

impl CheckConfig {
    /// Loads configuration from the project root, falling back to defaults
    /// when no config file is present.
    pub fn load(project_root: &Utf8Path) -> Self {
        let config_path = project_root.join("baseline-check.json");
        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            Self::default()
        }
    }

    /// Loads configuration from an explicit path.
    pub fn load_file(path: &Utf8Path) -> Self {
        match Self::parse_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path, e);
                Self::default()
            }
        }
    }

    fn parse_file(path: &Utf8Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    /// Returns the file extensions to scan.
    pub fn file_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.to_vec()
        } else {
            self.extensions.iter().map(|s| s.as_str()).collect()
        }
    }
}

//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Output path used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "default-album.png";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the generated cover is written.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Output file path.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Resolve the output path, preferring the explicit flag, then the
    /// `ALBUMART_OUTPUT` environment variable, then the config file.
    #[must_use]
    pub fn output_path(&self, explicit: Option<&str>) -> PathBuf {
        let from_env = std::env::var("ALBUMART_OUTPUT").ok().filter(|v| !v.is_empty());
        self.output_path_with(explicit, from_env.as_deref())
    }

    fn output_path_with(&self, explicit: Option<&str>, from_env: Option<&str>) -> PathBuf {
        explicit
            .or(from_env)
            .map(PathBuf::from)
            .or_else(|| self.output.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `ALBUMART_CONFIG` environment variable
/// 3. `~/.config/albumart/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("ALBUMART_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/albumart/config.toml")
    } else {
        PathBuf::from("albumart.toml")
    }
}

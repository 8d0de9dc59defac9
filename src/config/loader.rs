//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Input and output directory configuration.
///
/// The defaults reproduce the tool's flagless behavior: sources are read
/// from `input` and exports land in `output`, both relative to the working
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory containing source documents.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving exported PNG files and the manifest.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Export options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Whether to log each exported layer.
    #[serde(default = "default_true")]
    pub show_exports: bool,

    /// Whether to log hidden and empty layers as they are skipped.
    #[serde(default)]
    pub show_skipped_layers: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            show_exports: true,
            show_skipped_layers: false,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("input")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective input directory.
    pub fn input_dir(&self) -> PathBuf {
        self.paths.input_dir.clone()
    }

    /// Get the effective output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.paths.output_dir.clone()
    }
}

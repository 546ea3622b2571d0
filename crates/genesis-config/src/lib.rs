//! Genesis configuration system.
//!
//! Centralized settings loaded from `genesis.toml`, with `GENESIS_*`
//! environment variables taking precedence for temporary overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for the Genesis shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenesisConfig {
    /// Shell launch settings.
    pub shell: ShellConfig,
    /// Back-label rasterization settings.
    pub label: LabelConfig,
}

/// Shell launch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Launch directly into this 1-based example index instead of the menu.
    pub example: Option<u32>,
    /// Launch directly into this 0-based scene index instead of the menu.
    /// At most one of `example`/`scene` should be set; `scene` wins.
    pub scene: Option<u32>,
}

/// Back-label configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Path to a .ttf font file used for the back label.
    pub font: Option<PathBuf>,
    /// Label text override; defaults to "Back Menu".
    pub text: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            example: None,
            scene: None,
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font: None,
            text: None,
        }
    }
}

impl GenesisConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from `genesis.toml` in the current directory, or
    /// return the defaults if the file doesn't exist.
    pub fn load_or_default() -> Self {
        Self::load_from_file("genesis.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables.
    ///
    /// Environment variables take precedence over configuration file values,
    /// allowing temporary overrides without editing the file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("GENESIS_EXAMPLE") {
            if let Ok(index) = val.parse::<u32>() {
                self.shell.example = Some(index);
            }
        }
        if let Ok(val) = std::env::var("GENESIS_SCENE") {
            if let Ok(index) = val.parse::<u32>() {
                self.shell.scene = Some(index);
            }
        }
        if let Ok(font) = std::env::var("GENESIS_LABEL_FONT") {
            self.label.font = Some(PathBuf::from(font));
        }
        if let Ok(text) = std::env::var("GENESIS_LABEL_TEXT") {
            self.label.text = Some(text);
        }
    }

    /// Load configuration with environment variable overrides:
    /// `genesis.toml` first (or defaults), then `GENESIS_*` variables.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

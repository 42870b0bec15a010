//! Configuration file handling for asciify.
//!
//! Loads render defaults from `~/.config/asciify/config.toml` (or the
//! platform equivalent) or from a path given with `--config`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Method, Ramp};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// `[render]` table. Unset keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub size: Option<(u32, u32)>,
    #[serde(default)]
    pub method: Option<Method>,
    #[serde(default)]
    pub characters: Option<Ramp>,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub adjust: bool,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid size {width}x{height} in config file '{}': both dimensions must be at least 1", .path.display())]
    InvalidSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// A `size` with a zero dimension is rejected, matching `--size`.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some((width, height)) = config.render.size {
            if width == 0 || height == 0 {
                return Err(ConfigError::InvalidSize {
                    path: path.to_path_buf(),
                    width,
                    height,
                });
            }
        }
        Ok(config)
    }

    /// Load from the default location.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) if path.exists() => Self::load_from_explicit(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load from a path the user asked for. The file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content, path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Default config file path, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("asciify").join("config.toml"))
}

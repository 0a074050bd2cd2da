use crate::defaults;
use crate::error::{Result, SignshError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub detect: DetectConfig,
    pub output: OutputConfig,
}

/// Detection reduction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectConfig {
    /// Name of the detection model feeding the label stream
    pub model: String,
    /// Confidence floor for accepting a detection (0.0-1.0)
    pub min_confidence: f32,
}

/// Result presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the handshape description next to a detected letter
    pub explain: bool,
    /// Render the growing transcript on stderr during a live session
    pub live_preview: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_MODEL.to_string(),
            min_confidence: defaults::MIN_CONFIDENCE,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            explain: true,
            live_preview: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing, contains invalid TOML, or
    /// carries out-of-range values. Missing fields use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SignshError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                SignshError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only falls back to defaults when the file is missing; invalid TOML
    /// and invalid values still error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(SignshError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        let floor = self.detect.min_confidence;
        if !floor.is_finite() || !(0.0..=1.0).contains(&floor) {
            return Err(SignshError::ConfigInvalidValue {
                key: "detect.min_confidence".to_string(),
                message: format!("must be between 0.0 and 1.0, got {floor}"),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SIGNSH_MODEL → detect.model
    /// - SIGNSH_MIN_CONFIDENCE → detect.min_confidence
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("SIGNSH_MODEL")
            && !model.is_empty()
        {
            self.detect.model = model;
        }

        if let Ok(floor) = std::env::var("SIGNSH_MIN_CONFIDENCE")
            && let Ok(floor) = floor.parse::<f32>()
            && (0.0..=1.0).contains(&floor)
        {
            self.detect.min_confidence = floor;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/signsh/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("signsh")
            .join("config.toml")
    }
}

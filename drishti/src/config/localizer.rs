//! LocalizerConfig and its sections.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LocalizationError, Result};
use crate::filter::{BlurKernel, check_blurring};

use super::defaults;
use super::error::ConfigLoadError;

/// Default config path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/localizer.yaml";

/// Binary color sensor model.
///
/// `p_hit` and `p_miss` are relative weights, not probabilities. The ratio
/// `p_hit / p_miss` says how many times more likely a correct reading is than
/// a wrong one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorModel {
    /// Weight applied to cells whose color matches the reading.
    /// Default: 3.0
    #[serde(default = "defaults::p_hit")]
    pub p_hit: f64,

    /// Weight applied to cells whose color differs from the reading.
    /// Default: 1.0
    #[serde(default = "defaults::p_miss")]
    pub p_miss: f64,
}

impl Default for SensorModel {
    fn default() -> Self {
        Self {
            p_hit: defaults::p_hit(),
            p_miss: defaults::p_miss(),
        }
    }
}

impl SensorModel {
    /// Create a sensor model with the given weights
    pub fn new(p_hit: f64, p_miss: f64) -> Self {
        Self { p_hit, p_miss }
    }

    /// Require finite weights with `p_hit > p_miss > 0`.
    pub fn validate(&self) -> Result<()> {
        if !self.p_hit.is_finite() || !self.p_miss.is_finite() {
            return Err(LocalizationError::invalid(format!(
                "sensor weights must be finite, got p_hit={}, p_miss={}",
                self.p_hit, self.p_miss
            )));
        }
        if self.p_miss <= 0.0 {
            return Err(LocalizationError::invalid(format!(
                "p_miss must be positive, got {}",
                self.p_miss
            )));
        }
        if self.p_hit <= self.p_miss {
            return Err(LocalizationError::invalid(format!(
                "p_hit ({}) must exceed p_miss ({})",
                self.p_hit, self.p_miss
            )));
        }
        Ok(())
    }

    /// How many times more likely a correct reading is than a wrong one.
    pub fn likelihood_ratio(&self) -> f64 {
        self.p_hit / self.p_miss
    }
}

/// Motion noise model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionNoise {
    /// Fraction of mass that leaks to neighboring cells per move (0.0 - 1.0).
    /// 0.0 means noiseless motion.
    /// Default: 0.12
    #[serde(default = "defaults::blurring")]
    pub blurring: f64,

    /// Blur kernel shape.
    /// Default: cross (center + 4 axis neighbors)
    #[serde(default = "defaults::kernel")]
    pub kernel: BlurKernel,
}

impl Default for MotionNoise {
    fn default() -> Self {
        Self {
            blurring: defaults::blurring(),
            kernel: defaults::kernel(),
        }
    }
}

impl MotionNoise {
    /// Noiseless motion: shifts are exact.
    pub fn noiseless() -> Self {
        Self {
            blurring: 0.0,
            ..Default::default()
        }
    }

    /// Require `blurring` in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_blurring(self.blurring)
    }
}

/// Full localizer configuration loaded from YAML.
///
/// # Example
///
/// ```rust
/// use drishti::config::{LocalizerConfig, MotionNoise, SensorModel};
///
/// let config = LocalizerConfig {
///     sensor: SensorModel::new(0.9, 0.1),
///     motion: MotionNoise::noiseless(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizerConfig {
    /// Sensor settings
    #[serde(default)]
    pub sensor: SensorModel,

    /// Motion settings
    #[serde(default)]
    pub motion: MotionNoise,
}

impl LocalizerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/localizer.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{DEFAULT_CONFIG_PATH} not found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.sensor.validate()?;
        self.motion.validate()
    }
}

//! Configuration loading for Drishti.
//!
//! Loads sensor and motion noise settings from a single YAML file with
//! sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::LocalizerConfig;
//!
//! // Load from default path (configs/localizer.yaml)
//! let config = LocalizerConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = LocalizerConfig::default();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`SensorModel`] | Relative hit/miss weights of the color sensor |
//! | [`MotionNoise`] | Blur coefficient and kernel applied after each move |
//!
//! ## Example YAML
//!
//! ```yaml
//! sensor:
//!   p_hit: 3.0      # weight for cells matching the reading
//!   p_miss: 1.0     # weight for every other cell
//!
//! motion:
//!   blurring: 0.12  # fraction of mass leaking to neighbors
//!   kernel: cross   # cross (4 neighbors) or square (8 neighbors)
//! ```
//!
//! Values are validated on load: `p_hit > p_miss > 0` and
//! `0 <= blurring <= 1`.

mod defaults;
mod error;
mod localizer;

pub use error::ConfigLoadError;
pub use localizer::{DEFAULT_CONFIG_PATH, LocalizerConfig, MotionNoise, SensorModel};

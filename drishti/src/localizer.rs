//! Stateful localizer over a known color map.
//!
//! Wraps the stateless filter operations for drivers that would rather not
//! thread the belief grid through every call.
//!
//! # Update Cycle
//!
//! ```text
//! new() / reset()
//!       │
//!       ▼
//! ┌─────────────┐   sense(color)   ┌─────────────┐
//! │   Uniform   │ ───────────────► │  Posterior  │◄─┐
//! └─────────────┘                  └──────┬──────┘  │
//!                                         │         │ sense / move_by
//!                                         └─────────┘
//! ```
//!
//! A failed update leaves the current belief untouched and returns the
//! error; the caller decides whether to re-sense or [`Localizer::reset`].

use log::{debug, warn};

use crate::config::LocalizerConfig;
use crate::core::{Belief, ColorGrid, GridCoord};
use crate::error::{LocalizationError, Result};
use crate::filter::{initialize_beliefs, move_beliefs_with_kernel, sense};

/// Best guess of the robot's cell after an update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalizationEstimate {
    /// Most likely cell (first maximum in row-major order)
    pub cell: GridCoord,

    /// Belief mass on that cell (0.0 - 1.0)
    pub probability: f64,

    /// Shannon entropy of the whole belief (nats).
    ///
    /// 0 when certain, `ln(H * W)` when uniform.
    pub entropy: f64,
}

impl LocalizationEstimate {
    /// Summarize a belief grid.
    pub fn from_beliefs(beliefs: &Belief) -> Self {
        let (cell, probability) = beliefs.most_likely();
        Self {
            cell,
            probability,
            entropy: beliefs.entropy(),
        }
    }
}

/// Histogram-filter localizer for a fixed color map.
///
/// # Usage
///
/// ```rust
/// use drishti::{LocalizerConfig, Localizer};
/// use drishti::io::parse_color_map;
///
/// let grid = parse_color_map("r g g\ng g g\n")?;
/// let mut localizer = Localizer::new(grid, LocalizerConfig::default())?;
///
/// localizer.sense(&'r')?;
/// localizer.move_by(0, 1)?;
/// let estimate = localizer.estimate();
/// assert_eq!((estimate.cell.y, estimate.cell.x), (0, 1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Localizer<C = char> {
    /// The known map (immutable after creation).
    grid: ColorGrid<C>,

    /// Configuration parameters.
    config: LocalizerConfig,

    /// Current belief over the map.
    beliefs: Belief,

    /// Number of successful sense/move updates since the last reset.
    updates: usize,
}

impl<C: PartialEq> Localizer<C> {
    /// Create a localizer with a uniform belief.
    ///
    /// Fails with [`LocalizationError::InvalidInput`] if `config` is out of range.
    pub fn new(grid: ColorGrid<C>, config: LocalizerConfig) -> Result<Self> {
        config.validate()?;
        let beliefs = initialize_beliefs(&grid);
        Ok(Self {
            grid,
            config,
            beliefs,
            updates: 0,
        })
    }

    /// Start from a given belief instead of uniform.
    pub fn with_beliefs(
        grid: ColorGrid<C>,
        config: LocalizerConfig,
        beliefs: Belief,
    ) -> Result<Self> {
        if grid.shape() != beliefs.shape() {
            return Err(LocalizationError::DimensionMismatch {
                grid: grid.shape(),
                beliefs: beliefs.shape(),
            });
        }
        config.validate()?;
        Ok(Self {
            grid,
            config,
            beliefs,
            updates: 0,
        })
    }

    /// Incorporate a color reading.
    pub fn sense(&mut self, color: &C) -> Result<&Belief> {
        let sensor = self.config.sensor;
        let posterior = sense(color, &self.grid, &self.beliefs, sensor.p_hit, sensor.p_miss);
        self.commit("sense", posterior)
    }

    /// Incorporate a motion command of (dy, dx) cells.
    pub fn move_by(&mut self, dy: i64, dx: i64) -> Result<&Belief> {
        let motion = self.config.motion;
        let posterior =
            move_beliefs_with_kernel(dy, dx, &self.beliefs, motion.blurring, motion.kernel);
        self.commit("move", posterior)
    }

    /// Forget everything and return to a uniform belief.
    pub fn reset(&mut self) {
        self.beliefs = initialize_beliefs(&self.grid);
        self.updates = 0;
        debug!("Localizer reset to uniform over {} grid", self.grid.shape());
    }

    fn commit(&mut self, step: &str, posterior: Result<Belief>) -> Result<&Belief> {
        match posterior {
            Ok(beliefs) => {
                self.beliefs = beliefs;
                self.updates += 1;
                let estimate = self.estimate();
                debug!(
                    "{step} #{}: best cell ({}, {}) p={:.4}, entropy={:.3}",
                    self.updates,
                    estimate.cell.y,
                    estimate.cell.x,
                    estimate.probability,
                    estimate.entropy
                );
                Ok(&self.beliefs)
            }
            Err(e) => {
                if matches!(e, LocalizationError::DegenerateDistribution { .. }) {
                    warn!("{step} rejected, belief unchanged: {e}");
                }
                Err(e)
            }
        }
    }
}

impl<C> Localizer<C> {
    /// Current belief
    pub fn beliefs(&self) -> &Belief {
        &self.beliefs
    }

    /// Reference to the map
    pub fn grid(&self) -> &ColorGrid<C> {
        &self.grid
    }

    /// Configuration parameters
    pub fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// Number of successful updates since creation or the last reset
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// Most likely cell under the current belief
    pub fn estimate(&self) -> LocalizationEstimate {
        LocalizationEstimate::from_beliefs(&self.beliefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MotionNoise, SensorModel};
    use crate::core::GridShape;
    use crate::io::parse_color_map;
    use approx::assert_relative_eq;

    fn config(blurring: f64) -> LocalizerConfig {
        LocalizerConfig {
            sensor: SensorModel::new(0.9, 0.1),
            motion: MotionNoise {
                blurring,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_new_is_uniform() {
        let grid = parse_color_map("r g\ng g\n").unwrap();
        let localizer = Localizer::new(grid, LocalizerConfig::default()).unwrap();
        assert_eq!(localizer.beliefs(), &Belief::uniform(2, 2).unwrap());
        assert_eq!(localizer.updates(), 0);
        assert_relative_eq!(localizer.estimate().entropy, 4.0f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let grid = parse_color_map("r g\n").unwrap();
        let err = Localizer::new(grid, config(2.0)).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidInput(_)));
    }

    #[test]
    fn test_with_beliefs_shape_check() {
        let grid = parse_color_map("r g\ng g\n").unwrap();
        let err =
            Localizer::with_beliefs(grid, config(0.0), Belief::uniform(1, 2).unwrap()).unwrap_err();
        assert_eq!(
            err,
            LocalizationError::DimensionMismatch {
                grid: GridShape::new(2, 2),
                beliefs: GridShape::new(1, 2),
            }
        );
    }

    #[test]
    fn test_sense_then_move_tracks_robot() {
        let grid = parse_color_map("g g g g\ng r g g\ng g g g\n").unwrap();
        let mut localizer = Localizer::new(grid, config(0.0)).unwrap();

        localizer.sense(&'r').unwrap();
        assert_eq!(localizer.estimate().cell, GridCoord::new(1, 1));

        localizer.move_by(1, -2).unwrap();
        assert_eq!(localizer.estimate().cell, GridCoord::new(2, 3));
        assert_eq!(localizer.updates(), 2);
    }

    #[test]
    fn test_failed_update_keeps_belief() {
        let grid = parse_color_map("r g\ng g\n").unwrap();
        let zero = Belief::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let mut localizer = Localizer::with_beliefs(grid, config(0.1), zero.clone()).unwrap();

        assert!(matches!(
            localizer.sense(&'r'),
            Err(LocalizationError::DegenerateDistribution { .. })
        ));
        assert!(localizer.move_by(1, 0).is_err());
        assert_eq!(localizer.beliefs(), &zero);
        assert_eq!(localizer.updates(), 0);

        localizer.reset();
        assert!(localizer.beliefs().is_normalized(1e-9));
        assert!(localizer.sense(&'r').is_ok());
    }
}

//! Measurement update: reweight beliefs by a sensed color.

use log::trace;

use crate::core::{Belief, ColorGrid};
use crate::error::{LocalizationError, Result};

use super::normalize::normalize;

/// Bayesian update for a color measurement.
///
/// Each cell's prior is multiplied by `p_hit` if the map color equals `color`
/// and by `p_miss` otherwise, then the grid is normalized. The weights are
/// relative: only the ratio `p_hit / p_miss` affects the posterior.
///
/// # Errors
/// - [`LocalizationError::DimensionMismatch`] if `grid` and `beliefs` differ in shape
/// - [`LocalizationError::InvalidInput`] if `p_hit` or `p_miss` is negative or not finite
/// - [`LocalizationError::DegenerateDistribution`] if every weight is zero
///   (e.g. `p_hit == p_miss == 0`, or an all-zero prior)
///
/// # Example
/// ```
/// use drishti::{ColorGrid, initialize_beliefs, sense};
///
/// let grid = ColorGrid::from_rows(vec![vec!['r', 'g'], vec!['g', 'g']])?;
/// let prior = initialize_beliefs(&grid);
/// let posterior = sense(&'r', &grid, &prior, 3.0, 1.0)?;
/// assert!((posterior.get(0, 0).unwrap() - 0.5).abs() < 1e-9);
/// # Ok::<(), drishti::LocalizationError>(())
/// ```
pub fn sense<C: PartialEq>(
    color: &C,
    grid: &ColorGrid<C>,
    beliefs: &Belief,
    p_hit: f64,
    p_miss: f64,
) -> Result<Belief> {
    if grid.shape() != beliefs.shape() {
        return Err(LocalizationError::DimensionMismatch {
            grid: grid.shape(),
            beliefs: beliefs.shape(),
        });
    }
    check_weight("p_hit", p_hit)?;
    check_weight("p_miss", p_miss)?;

    let weighted: Vec<f64> = grid
        .cells()
        .iter()
        .zip(beliefs.values())
        .map(|(cell, &prior)| {
            if cell == color {
                prior * p_hit
            } else {
                prior * p_miss
            }
        })
        .collect();

    trace!(
        "sense: {} grid, p_hit={p_hit}, p_miss={p_miss}, {} matching cells",
        grid.shape(),
        grid.count(color)
    );

    normalize(weighted, grid.shape())
}

fn check_weight(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LocalizationError::invalid(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

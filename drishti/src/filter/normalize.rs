//! Normalization of unweighted cell masses into a belief.
//!
//! Both the sensor and motion updates end here, so this is the only place a
//! belief's total mass is divided out.

use crate::core::{Belief, GridShape};
use crate::error::{LocalizationError, Result};

/// Total mass of a grid, failing if it cannot be normalized.
///
/// Returns [`LocalizationError::DegenerateDistribution`] when the sum is zero,
/// negative, NaN or infinite.
pub fn total_mass(values: &[f64]) -> Result<f64> {
    let sum: f64 = values.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        Ok(sum)
    } else {
        Err(LocalizationError::DegenerateDistribution { sum })
    }
}

/// Check that a flat slice fills a non-empty grid of `shape`.
pub(crate) fn check_cells(values: &[f64], shape: GridShape) -> Result<()> {
    if shape.is_empty() || values.len() != shape.cell_count() {
        return Err(LocalizationError::invalid(format!(
            "{} values cannot fill a {shape} grid",
            values.len()
        )));
    }
    Ok(())
}

/// Divide every entry by the grid-wide sum.
///
/// # Errors
/// - [`LocalizationError::InvalidInput`] if `values` does not match `shape`
///   or contains a negative entry
/// - [`LocalizationError::DegenerateDistribution`] on a zero or non-finite sum
pub fn normalize(values: Vec<f64>, shape: GridShape) -> Result<Belief> {
    check_cells(&values, shape)?;
    if let Some(i) = values.iter().position(|&v| v < 0.0) {
        let c = shape.coord(i);
        return Err(LocalizationError::invalid(format!(
            "negative mass {} at ({}, {})",
            values[i], c.y, c.x
        )));
    }

    let sum = total_mass(&values)?;
    let normalized = values.into_iter().map(|v| v / sum).collect();
    Ok(Belief::from_parts(normalized, shape))
}

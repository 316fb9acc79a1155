//! Uniform prior over the map.

use log::trace;

use crate::core::{Belief, ColorGrid};

/// Uniform belief over every cell of `grid`.
///
/// Every cell gets `1 / (H * W)`. A [`ColorGrid`] is never empty or ragged
/// (those are rejected by [`ColorGrid::from_rows`] with
/// [`InvalidInput`](crate::LocalizationError::InvalidInput)), so this cannot
/// fail. Use [`Belief::uniform`] to start from bare dimensions instead.
pub fn initialize_beliefs<C>(grid: &ColorGrid<C>) -> Belief {
    let shape = grid.shape();
    let per_cell = 1.0 / shape.cell_count() as f64;
    trace!("initialize_beliefs: {shape} grid, {per_cell:.6} per cell");
    Belief::from_parts(vec![per_cell; shape.cell_count()], shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_over_grid() {
        let grid = ColorGrid::from_rows(vec![vec!['r', 'g'], vec!['g', 'g']]).unwrap();
        let b = initialize_beliefs(&grid);
        assert_eq!(b.shape(), grid.shape());
        for &p in b.values() {
            assert_relative_eq!(p, 0.25);
        }
    }

    #[test]
    fn test_sums_to_one_on_awkward_sizes() {
        for (h, w) in [(1, 1), (1, 7), (3, 11), (13, 17)] {
            let grid = ColorGrid::from_rows(vec![vec!['g'; w]; h]).unwrap();
            let b = initialize_beliefs(&grid);
            assert_relative_eq!(b.sum(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(b.get(0, 0).unwrap(), 1.0 / (h * w) as f64);
        }
    }
}

//! Probability distribution over grid cells.

use std::fmt;

use crate::error::{LocalizationError, Result};

use super::{GridCoord, GridShape};

/// Default tolerance used when checking that a belief sums to one.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Belief grid: probability that the robot is in each cell.
///
/// Stored row-major in a single contiguous `Vec<f64>`:
/// ```text
/// values: [row 0 ........ | row 1 ........ | ... | row H-1 ........]
///          <---- W ---->
/// ```
///
/// Every belief returned by the filter sums to 1.0 (within
/// [`NORMALIZATION_TOLERANCE`]) and has no negative entries. Priors built by
/// the caller with [`Belief::from_rows`] are only checked for shape and sign,
/// so an all-zero prior can still reach the filter and be reported as
/// degenerate there.
#[derive(Clone, Debug, PartialEq)]
pub struct Belief {
    values: Vec<f64>,
    shape: GridShape,
}

impl Belief {
    /// Uniform belief: every cell holds `1 / (height * width)`.
    pub fn uniform(height: usize, width: usize) -> Result<Self> {
        let shape = GridShape::new(height, width);
        if shape.is_empty() {
            return Err(LocalizationError::invalid(format!(
                "belief grid must be at least 1x1, got {shape}"
            )));
        }
        let per_cell = 1.0 / shape.cell_count() as f64;
        Ok(Self {
            values: vec![per_cell; shape.cell_count()],
            shape,
        })
    }

    /// Build a belief from rows of probabilities.
    ///
    /// Fails with [`LocalizationError::InvalidInput`] on empty or ragged rows,
    /// negative entries, or non-finite entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(LocalizationError::invalid("belief grid is empty"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(LocalizationError::invalid(format!(
                "ragged belief grid: row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }

        let values: Vec<f64> = rows.into_iter().flatten().collect();
        let shape = GridShape::new(height, width);
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            let c = shape.coord(i);
            return Err(LocalizationError::invalid(format!(
                "belief at ({}, {}) must be finite and non-negative, got {}",
                c.y, c.x, v
            )));
        }

        Ok(Self { values, shape })
    }

    /// Single-cell certainty: 1.0 at `at`, 0.0 elsewhere.
    pub fn point_mass(height: usize, width: usize, at: GridCoord) -> Result<Self> {
        let shape = GridShape::new(height, width);
        if shape.is_empty() || !shape.contains(at) {
            return Err(LocalizationError::invalid(format!(
                "point mass at ({}, {}) outside {shape} grid",
                at.y, at.x
            )));
        }
        let mut values = vec![0.0; shape.cell_count()];
        values[shape.index(at)] = 1.0;
        Ok(Self { values, shape })
    }

    /// Wrap already-checked row-major values. Callers guarantee
    /// `values.len() == shape.cell_count()`.
    pub(crate) fn from_parts(values: Vec<f64>, shape: GridShape) -> Self {
        debug_assert_eq!(values.len(), shape.cell_count());
        Self { values, shape }
    }

    /// Grid dimensions.
    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Probability at (y, x), or `None` outside the grid.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Option<f64> {
        let coord = GridCoord::new(y, x);
        self.shape
            .contains(coord)
            .then(|| self.values[self.shape.index(coord)])
    }

    /// Row-major view of all probabilities.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.shape.width)
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Total probability mass.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// True if the total mass is within `tolerance` of one.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }

    /// Most likely cell and its probability.
    ///
    /// Ties resolve to the first maximum in row-major order.
    pub fn most_likely(&self) -> (GridCoord, f64) {
        let (index, p) = self
            .values
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, p)| {
                if p > best.1 { (i, p) } else { best }
            });
        (self.shape.coord(index), p)
    }

    /// Shannon entropy in nats (`0 * ln 0` counts as 0).
    ///
    /// Zero for a point mass, `ln(H * W)` for a uniform belief.
    pub fn entropy(&self) -> f64 {
        self.values
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.ln())
            .sum()
    }
}

impl fmt::Display for Belief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        f.write_str(&crate::io::render_beliefs(self, precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform() {
        let b = Belief::uniform(2, 4).unwrap();
        assert_eq!(b.shape(), GridShape::new(2, 4));
        for &p in b.values() {
            assert_relative_eq!(p, 0.125);
        }
        assert!(b.is_normalized(NORMALIZATION_TOLERANCE));
    }

    #[test]
    fn test_uniform_rejects_zero_dimensions() {
        assert!(matches!(
            Belief::uniform(0, 3),
            Err(LocalizationError::InvalidInput(_))
        ));
        assert!(matches!(
            Belief::uniform(3, 0),
            Err(LocalizationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_rows_validation() {
        assert!(Belief::from_rows(vec![]).is_err());
        assert!(Belief::from_rows(vec![vec![0.5, 0.5], vec![1.0]]).is_err());
        assert!(Belief::from_rows(vec![vec![0.5, -0.1]]).is_err());
        assert!(Belief::from_rows(vec![vec![0.5, f64::NAN]]).is_err());

        // Unnormalized priors are allowed
        let b = Belief::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(b.sum(), 0.0);
        assert!(!b.is_normalized(NORMALIZATION_TOLERANCE));
    }

    #[test]
    fn test_point_mass_and_most_likely() {
        let b = Belief::point_mass(3, 3, GridCoord::new(1, 2)).unwrap();
        assert_eq!(b.get(1, 2), Some(1.0));
        assert_eq!(b.get(0, 0), Some(0.0));
        assert_eq!(b.most_likely(), (GridCoord::new(1, 2), 1.0));
        assert_eq!(b.entropy(), 0.0);

        assert!(Belief::point_mass(3, 3, GridCoord::new(3, 0)).is_err());
    }

    #[test]
    fn test_most_likely_first_tie() {
        let b = Belief::from_rows(vec![vec![0.1, 0.4], vec![0.4, 0.1]]).unwrap();
        assert_eq!(b.most_likely(), (GridCoord::new(0, 1), 0.4));
    }

    #[test]
    fn test_entropy_uniform() {
        let b = Belief::uniform(3, 3).unwrap();
        assert_relative_eq!(b.entropy(), (9.0f64).ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![0.1, 0.2, 0.3], vec![0.2, 0.1, 0.1]];
        let b = Belief::from_rows(rows.clone()).unwrap();
        assert_eq!(b.to_rows(), rows);
        assert_eq!(b.rows().count(), 2);
    }
}

//! Immutable color map of the world.

use crate::error::{LocalizationError, Result};

use super::{GridCoord, GridShape};

/// Rectangular map of cell colors.
///
/// The map is fixed for the lifetime of a localization session. Colors are
/// compared with `PartialEq` only, so any small label type works; `char` is
/// the default because maps are usually written as letters (`'r'`, `'g'`).
///
/// Storage is a single row-major `Vec` like the belief grid, so the two can be
/// walked together by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid<C = char> {
    cells: Vec<C>,
    shape: GridShape,
}

impl<C> ColorGrid<C> {
    /// Build a grid from rows.
    ///
    /// Fails with [`LocalizationError::InvalidInput`] if there are no rows,
    /// the first row is empty, or the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(LocalizationError::invalid("grid has no rows"));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(LocalizationError::invalid("grid rows are empty"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(LocalizationError::invalid(format!(
                "ragged grid: row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            cells,
            shape: GridShape::new(height, width),
        })
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

    /// Color at (y, x), or `None` outside the grid.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Option<&C> {
        let coord = GridCoord::new(y, x);
        self.shape
            .contains(coord)
            .then(|| &self.cells[self.shape.index(coord)])
    }

    /// Row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.cells.chunks(self.shape.width)
    }
}

impl<C: PartialEq> ColorGrid<C> {
    /// Number of cells with the given color.
    pub fn count(&self, color: &C) -> usize {
        self.cells.iter().filter(|c| *c == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_grid() -> ColorGrid {
        ColorGrid::from_rows(vec![
            vec!['g', 'g', 'g'],
            vec!['g', 'r', 'g'],
            vec!['g', 'g', 'g'],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows() {
        let grid = rgb_grid();
        assert_eq!(grid.shape(), GridShape::new(3, 3));
        assert_eq!(grid.get(1, 1), Some(&'r'));
        assert_eq!(grid.get(0, 2), Some(&'g'));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.count(&'r'), 1);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_rejects_empty() {
        let err = ColorGrid::<char>::from_rows(vec![]).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidInput(_)));

        let err = ColorGrid::<char>::from_rows(vec![vec![], vec![]]).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_ragged() {
        let err = ColorGrid::from_rows(vec![vec!['r', 'g'], vec!['g']]).unwrap_err();
        match err {
            LocalizationError::InvalidInput(msg) => assert!(msg.contains("row 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_char_colors() {
        let grid = ColorGrid::from_rows(vec![vec![0u8, 1, 2, 1]]).unwrap();
        assert_eq!(grid.shape(), GridShape::new(1, 4));
        assert_eq!(grid.count(&1), 2);
    }
}

//! Cell coordinates and grid shapes for the cyclic world.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::math::wrap;

/// Grid coordinates (row and column indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index
    pub y: usize,
    /// Column index
    pub x: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Offset this coordinate by (dy, dx) on a torus of the given shape.
    #[inline]
    pub fn offset(&self, dy: i64, dx: i64, shape: GridShape) -> GridCoord {
        // Reduce the offset first so huge commands cannot overflow.
        GridCoord::new(
            wrap(self.y as i64 + wrap(dy, shape.height) as i64, shape.height),
            wrap(self.x as i64 + wrap(dx, shape.width) as i64, shape.width),
        )
    }

    /// Get the 4 cardinal neighbors (N, E, S, W), wrapping at the edges.
    #[inline]
    pub fn neighbors_4(&self, shape: GridShape) -> [GridCoord; 4] {
        [
            self.offset(-1, 0, shape), // North
            self.offset(0, 1, shape),  // East
            self.offset(1, 0, shape),  // South
            self.offset(0, -1, shape), // West
        ]
    }

    /// Get the 4 diagonal neighbors (NE, SE, SW, NW), wrapping at the edges.
    #[inline]
    pub fn diagonals(&self, shape: GridShape) -> [GridCoord; 4] {
        [
            self.offset(-1, 1, shape),
            self.offset(1, 1, shape),
            self.offset(1, -1, shape),
            self.offset(-1, -1, shape),
        ]
    }
}

/// Dimensions of a color grid or belief grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridShape {
    /// Number of rows (H)
    pub height: usize,
    /// Number of columns (W)
    pub width: usize,
}

impl GridShape {
    /// Create a new shape
    #[inline]
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// True if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Row-major index of a coordinate.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> usize {
        coord.y * self.width + coord.x
    }

    /// Coordinate of a row-major index.
    #[inline]
    pub fn coord(&self, index: usize) -> GridCoord {
        GridCoord::new(index / self.width, index % self.width)
    }

    /// Check if a coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.y < self.height && coord.x < self.width
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

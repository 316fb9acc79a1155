//! Motion update: shift belief mass, then blur it.
//!
//! # Pipeline
//!
//! ```text
//! prior ──shift(dy, dx)──► shifted ──blur(b)──► blurred ──normalize──► posterior
//!        (exact, wraps)              (kernel)
//! ```
//!
//! # Kernels
//!
//! ```text
//!        Cross (default)              Square
//!      .    b/4    .           b/12   b/6   b/12
//!     b/4   1-b   b/4          b/6    1-b   b/6
//!      .    b/4    .           b/12   b/6   b/12
//! ```
//!
//! Both kernels sum to one, so blurring never creates or destroys mass.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Belief, GridCoord, GridShape};
use crate::error::{LocalizationError, Result};

use super::normalize::{check_cells, normalize, total_mass};

/// Diffusion kernel applied after a shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurKernel {
    /// 5-point stencil: center `1 - b`, each axis neighbor `b / 4`.
    #[default]
    Cross,
    /// 3×3 window: center `1 - b`, axis neighbors `b / 6`, diagonals `b / 12`.
    Square,
}

/// Per-cell weights of a kernel for a given blur coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelWeights {
    /// Weight kept by the cell itself
    pub center: f64,
    /// Weight of each of the 4 axis neighbors
    pub edge: f64,
    /// Weight of each of the 4 diagonal neighbors
    pub corner: f64,
}

impl BlurKernel {
    /// Kernel weights for blur coefficient `blurring`.
    pub fn weights(self, blurring: f64) -> KernelWeights {
        match self {
            BlurKernel::Cross => KernelWeights {
                center: 1.0 - blurring,
                edge: blurring / 4.0,
                corner: 0.0,
            },
            BlurKernel::Square => KernelWeights {
                center: 1.0 - blurring,
                edge: blurring / 6.0,
                corner: blurring / 12.0,
            },
        }
    }
}

/// Check that a blur coefficient lies in `[0, 1]`.
pub fn check_blurring(blurring: f64) -> Result<()> {
    if (0.0..=1.0).contains(&blurring) {
        Ok(())
    } else {
        Err(LocalizationError::invalid(format!(
            "blurring must be in [0, 1], got {blurring}"
        )))
    }
}

/// Motion update with the default [`BlurKernel::Cross`] kernel.
///
/// Moves every unit of mass by `(dy, dx)` with wraparound, blurs by
/// `blurring`, and normalizes.
///
/// # Errors
/// - [`LocalizationError::InvalidInput`] if `blurring` is outside `[0, 1]`
/// - [`LocalizationError::DegenerateDistribution`] if `beliefs` has no mass
///
/// # Example
/// ```
/// use drishti::{Belief, GridCoord, move_beliefs};
///
/// let prior = Belief::point_mass(3, 3, GridCoord::new(1, 1))?;
/// let moved = move_beliefs(1, 1, &prior, 0.0)?;
/// assert_eq!(moved.get(2, 2), Some(1.0));
/// # Ok::<(), drishti::LocalizationError>(())
/// ```
pub fn move_beliefs(dy: i64, dx: i64, beliefs: &Belief, blurring: f64) -> Result<Belief> {
    move_beliefs_with_kernel(dy, dx, beliefs, blurring, BlurKernel::Cross)
}

/// Motion update with an explicit blur kernel.
pub fn move_beliefs_with_kernel(
    dy: i64,
    dx: i64,
    beliefs: &Belief,
    blurring: f64,
    kernel: BlurKernel,
) -> Result<Belief> {
    check_blurring(blurring)?;

    let shape = beliefs.shape();
    let shifted = shift(beliefs.values(), shape, dy, dx)?;
    let mass = total_mass(&shifted)?;
    let blurred = blur(&shifted, shape, blurring, kernel)?;

    trace!("move: {shape} grid, dy={dy}, dx={dx}, blurring={blurring}, {kernel:?}, mass={mass:.6}");

    normalize(blurred, shape)
}

/// Noiseless shift: mass at (i, j) lands on ((i + dy) mod H, (j + dx) mod W).
///
/// The mapping is a bijection, so the output is a permutation of the input.
///
/// Fails with [`LocalizationError::InvalidInput`] if `values` does not fill
/// a non-empty `shape`.
pub fn shift(values: &[f64], shape: GridShape, dy: i64, dx: i64) -> Result<Vec<f64>> {
    check_cells(values, shape)?;
    let mut shifted = vec![0.0; values.len()];
    for (i, &mass) in values.iter().enumerate() {
        let dest = shape.coord(i).offset(dy, dx, shape);
        shifted[shape.index(dest)] = mass;
    }
    Ok(shifted)
}

/// Blur a row-major grid with wraparound.
///
/// Each output cell gathers weighted mass from itself and its neighbors.
/// The kernels are symmetric, so gathering and scattering agree and the total
/// is preserved. `blurring == 0` returns the input unchanged.
///
/// # Errors
/// [`LocalizationError::InvalidInput`] if `blurring` is outside `[0, 1]` or
/// `values` does not fill a non-empty `shape`.
pub fn blur(
    values: &[f64],
    shape: GridShape,
    blurring: f64,
    kernel: BlurKernel,
) -> Result<Vec<f64>> {
    check_blurring(blurring)?;
    check_cells(values, shape)?;
    if blurring == 0.0 {
        return Ok(values.to_vec());
    }

    let w = kernel.weights(blurring);
    let at = |c: GridCoord| values[shape.index(c)];

    // Weight each neighbor before summing: on narrow grids the same cell
    // appears several times and the raw sum can overflow.
    let blurred = (0..values.len())
        .map(|i| {
            let cell = shape.coord(i);
            let mut blurred = w.center * values[i];
            blurred += cell
                .neighbors_4(shape)
                .into_iter()
                .map(|c| w.edge * at(c))
                .sum::<f64>();
            if w.corner != 0.0 {
                blurred += cell
                    .diagonals(shape)
                    .into_iter()
                    .map(|c| w.corner * at(c))
                    .sum::<f64>();
            }
            blurred
        })
        .collect();
    Ok(blurred)
}

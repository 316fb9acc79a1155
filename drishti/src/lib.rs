//! # Drishti
//!
//! Discrete Bayesian (histogram filter) localization for a robot on a cyclic
//! grid world where every cell has a known color.
//!
//! ## Overview
//!
//! The robot alternates between sensing the color under it and moving by a
//! commanded offset. Drishti keeps a [`Belief`] (a probability for every cell)
//! and updates it with three stateless operations:
//!
//! - [`initialize_beliefs`] - Uniform prior over the map
//! - [`sense`] - Reweight by a color reading, then normalize
//! - [`move_beliefs`] - Shift by (dy, dx) with wraparound, blur, then normalize
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti::{ColorGrid, initialize_beliefs, move_beliefs, sense};
//!
//! let grid = ColorGrid::from_rows(vec![
//!     vec!['g', 'g', 'g'],
//!     vec!['g', 'r', 'g'],
//!     vec!['g', 'g', 'g'],
//! ])?;
//!
//! let beliefs = initialize_beliefs(&grid);
//! let beliefs = sense(&'r', &grid, &beliefs, 0.6, 0.2)?;
//! let beliefs = move_beliefs(1, 1, &beliefs, 0.0)?;
//!
//! let (cell, p) = beliefs.most_likely();
//! assert_eq!((cell.y, cell.x), (2, 2));
//! assert!((p - 0.6 / 2.2).abs() < 1e-9);
//! # Ok::<(), drishti::LocalizationError>(())
//! ```
//!
//! ## Coordinate System
//!
//! - `y`: Row index, increasing downward
//! - `x`: Column index, increasing to the right
//! - The world is a torus: indices wrap with floor modulo, so a move of
//!   `dy = -1` from row 0 lands on row `H - 1`
//!
//! ## Architecture
//!
//! - [`core`]: Grid shapes, coordinates, [`ColorGrid`] and [`Belief`]
//! - [`filter`]: Initialize, sense, move, blur and normalize
//! - [`config`]: Sensor and motion noise settings (YAML)
//! - [`io`]: Text color maps and belief printouts
//! - [`localizer`]: Stateful [`Localizer`] for driver loops

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Filter operations
pub mod filter;

// Configuration
pub mod config;

// Text maps and debug output
pub mod io;

// Stateful wrapper
pub mod localizer;

// Re-export commonly used types
pub use config::{ConfigLoadError, LocalizerConfig, MotionNoise, SensorModel};
pub use crate::core::{Belief, ColorGrid, GridCoord, GridShape, wrap};
pub use error::{LocalizationError, Result};
pub use filter::{
    BlurKernel, initialize_beliefs, move_beliefs, move_beliefs_with_kernel, normalize, sense,
};
pub use localizer::{LocalizationEstimate, Localizer};

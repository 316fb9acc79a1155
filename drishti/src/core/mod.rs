//! Core types for the Drishti library.
//!
//! The world is an H×W grid whose edges wrap around: stepping off the right
//! edge lands on the left edge, stepping off the bottom lands on the top.
//! Rows are indexed by `y` (top to bottom), columns by `x` (left to right).
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Cell indices (y, x)
//! - [`GridShape`]: Grid dimensions (height, width)
//! - [`math::wrap`]: Floor-modulo index wrapping
//!
//! ### Maps and Beliefs
//! - [`ColorGrid`]: Immutable color label per cell
//! - [`Belief`]: Probability distribution over cells

mod belief;
mod coord;
mod grid;

pub mod math;

pub use belief::{Belief, NORMALIZATION_TOLERANCE};
pub use coord::{GridCoord, GridShape};
pub use grid::ColorGrid;
pub use math::wrap;

//! Histogram filter operations.
//!
//! Three stateless updates over a [`Belief`](crate::core::Belief):
//!
//! | Operation | Step |
//! |-----------|------|
//! | [`initialize_beliefs`] | Uniform prior over the map |
//! | [`sense`] | Measurement update from a sensed color |
//! | [`move_beliefs`] | Prediction update from a motion command |
//!
//! A driver alternates them:
//!
//! ```text
//! initialize ──► sense ──► move ──► sense ──► move ──► ...
//! ```
//!
//! Every update returns a new belief and routes through [`normalize`], which
//! rejects distributions with no usable mass.

mod initialize;
mod motion;
mod normalize;
mod sense;

pub use initialize::initialize_beliefs;
pub use motion::{
    BlurKernel, KernelWeights, blur, check_blurring, move_beliefs, move_beliefs_with_kernel, shift,
};
pub use normalize::{normalize, total_mass};
pub use sense::sense;

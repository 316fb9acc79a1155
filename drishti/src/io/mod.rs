//! Text input and debug output.
//!
//! - **Color maps**: one row per line, whitespace-separated single letters
//! - **Belief printouts**: fixed-precision rows for eyeballing a filter run
//!
//! ```rust
//! use drishti::io::{parse_color_map, render_beliefs};
//! use drishti::initialize_beliefs;
//!
//! let grid = parse_color_map("r g\ng g\n")?;
//! let beliefs = initialize_beliefs(&grid);
//! assert_eq!(render_beliefs(&beliefs, 2), "0.25 0.25\n0.25 0.25\n");
//! # Ok::<(), drishti::LocalizationError>(())
//! ```

mod text;

pub use text::{parse_color_map, render_beliefs, render_color_map};

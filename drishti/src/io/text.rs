//! Plain-text color maps and belief printouts.

use std::fmt::Write;

use crate::core::{Belief, ColorGrid};
use crate::error::{LocalizationError, Result};

/// Parse a color map written one row per line, one letter per cell.
///
/// Cells are separated by whitespace; blank lines are skipped.
///
/// ```text
/// g g g
/// g r g
/// g g g
/// ```
///
/// Fails with [`LocalizationError::InvalidInput`] if a token is longer than
/// one character, or the map is empty or ragged.
pub fn parse_color_map(text: &str) -> Result<ColorGrid<char>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(LocalizationError::invalid(format!(
                        "line {}: expected a single-character color, got {token:?}",
                        line_no + 1
                    ))),
                }
            })
            .collect::<Result<Vec<char>>>()?;
        rows.push(row);
    }
    ColorGrid::from_rows(rows)
}

/// Format a color map back into the text form read by [`parse_color_map`].
pub fn render_color_map(grid: &ColorGrid<char>) -> String {
    let mut out = String::with_capacity(grid.shape().cell_count() * 2);
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Format beliefs as rows of fixed-precision numbers.
///
/// ```text
/// 0.00 0.00 0.00
/// 0.00 1.00 0.00
/// 0.00 0.00 0.00
/// ```
pub fn render_beliefs(beliefs: &Belief, precision: usize) -> String {
    let mut out = String::new();
    for row in beliefs.rows() {
        for (x, p) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(out, "{p:.precision$}");
        }
        out.push('\n');
    }
    out
}

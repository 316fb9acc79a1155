//! Test utilities for Drishti integration tests.
//!
//! Maps, belief builders, and float comparisons shared by the test files.

#![allow(dead_code)]

use drishti::io::parse_color_map;
use drishti::{Belief, ColorGrid};

/// Sum tolerance for every belief the filter returns.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// 3x3 green map with a red center.
pub fn center_red() -> ColorGrid {
    parse_color_map("g g g\ng r g\ng g g\n").unwrap()
}

/// 5x5 map with a few colors, no two rows alike.
pub fn striped_room() -> ColorGrid {
    parse_color_map(
        "r g g r g\n\
         g g r g g\n\
         b g g g r\n\
         g r g b g\n\
         g g b g g\n",
    )
    .unwrap()
}

/// Deterministic non-uniform prior that sums to one.
pub fn lumpy_prior(height: usize, width: usize) -> Belief {
    let raw: Vec<Vec<f64>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| ((y * 7 + x * 3) % 5 + 1) as f64)
                .collect()
        })
        .collect();
    let total: f64 = raw.iter().flatten().sum();
    Belief::from_rows(
        raw.into_iter()
            .map(|row| row.into_iter().map(|v| v / total).collect())
            .collect(),
    )
    .unwrap()
}

/// Check every entry is non-negative and the total is one.
pub fn assert_valid_distribution(beliefs: &Belief) {
    assert!(
        beliefs.values().iter().all(|&p| p >= 0.0 && p.is_finite()),
        "belief has negative or non-finite entries: {:?}",
        beliefs.values()
    );
    assert!(
        beliefs.is_normalized(SUM_TOLERANCE),
        "belief should sum to 1.0, got {}",
        beliefs.sum()
    );
}

/// Element-wise comparison of two beliefs.
pub fn assert_beliefs_close(a: &Belief, b: &Belief, epsilon: f64) {
    assert_eq!(a.shape(), b.shape());
    for (i, (x, y)) in a.values().iter().zip(b.values()).enumerate() {
        assert!(
            (x - y).abs() <= epsilon,
            "cell {} differs: {} vs {}",
            i,
            x,
            y
        );
    }
}

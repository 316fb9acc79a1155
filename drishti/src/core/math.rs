//! Index arithmetic on the torus.

/// Wrap an index into `[0, n)` using floor modulo.
///
/// Motion commands may be negative, so a truncating remainder is not enough:
/// `-1 % 5 == -1` whereas `wrap(-1, 5) == 4`.
///
/// # Example
/// ```
/// use drishti::core::math::wrap;
///
/// assert_eq!(wrap(-1, 5), 4);
/// assert_eq!(wrap(5, 5), 0);
/// assert_eq!(wrap(-11, 5), 4);
/// ```
///
/// # Panics
/// Panics if `n == 0`. Grid shapes are never empty once constructed.
///
/// `n` must fit in an `i64`. Any dimension of an allocated grid does, since
/// a `Vec` never holds more than `isize::MAX` bytes.
#[inline]
pub fn wrap(i: i64, n: usize) -> usize {
    i.rem_euclid(n as i64) as usize
}

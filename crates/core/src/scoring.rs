//! Scoring module - flat per-row line clear points
//!
//! There are no levels, combos or drop bonuses: each cleared row is worth
//! [`POINTS_PER_ROW`] regardless of how many rows cleared together.

use crate::types::POINTS_PER_ROW;

/// Points for clearing `rows` rows in one lock
pub fn line_clear_points(rows: usize) -> u32 {
    (rows as u32).saturating_mul(POINTS_PER_ROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 10);
        assert_eq!(line_clear_points(4), 40);
    }
}

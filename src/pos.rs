use std::{
    cmp::Ordering,
    ops::Add,
};

/// A cell coordinate, `x` being the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    /// Offsets of the 3x3 neighborhood in reading order, the center included
    ///
    /// The center sits at index 4, which is also its bit in a neighborhood mask.
    pub const NEIGHBORHOOD: [Pos2; 9] = [
        Pos2 { x: -1, y: -1 },
        Pos2 { x: 0, y: -1 },
        Pos2 { x: 1, y: -1 },
        Pos2 { x: -1, y: 0 },
        Pos2 { x: 0, y: 0 },
        Pos2 { x: 1, y: 0 },
        Pos2 { x: -1, y: 1 },
        Pos2 { x: 0, y: 1 },
        Pos2 { x: 1, y: 1 },
    ];

    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
    /// The position of the cell at `(row, col)`
    ///
    /// # Panics
    /// If `row` or `col` exceeds `i32::MAX`. Decoded patterns are capped far below
    /// that at [`MAX_PATTERN_SIDE`](crate::enc::MAX_PATTERN_SIDE).
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            x: i32::try_from(col).expect("column index fits in i32"),
            y: i32::try_from(row).expect("row index fits in i32"),
        }
    }

    /// The (row, col) pair for this position, or [`None`] if it lies above or left of the origin
    #[inline]
    pub fn to_row_col(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.y).ok()?;
        let col = usize::try_from(self.x).ok()?;
        Some((row, col))
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // rows first, then columns, i.e. reading order
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_row_then_column() {
        let mut positions = vec![Pos2::new(1, 0), Pos2::new(0, 4), Pos2::new(0, 1)];
        positions.sort();

        assert_eq!(positions, vec![Pos2::new(0, 1), Pos2::new(0, 4), Pos2::new(1, 0)]);
    }

    #[test]
    fn negative_positions_have_no_row_col() {
        let corner = Pos2::zero() + Pos2 { x: -1, y: 0 };

        assert_eq!(corner.to_row_col(), None);
        assert_eq!(Pos2::new(2, 3).to_row_col(), Some((2, 3)));
    }

    #[test]
    fn largest_index_round_trips() {
        let max = i32::MAX as usize;

        assert_eq!(Pos2::new(max, max).to_row_col(), Some((max, max)));
    }

    #[test]
    #[should_panic(expected = "column index fits in i32")]
    fn oversized_column_is_not_truncated() {
        Pos2::new(0, i32::MAX as usize + 1);
    }

    #[test]
    fn neighborhood_center_is_bit_four() {
        assert_eq!(Pos2::NEIGHBORHOOD[4], Pos2::zero());
        assert_eq!(Pos2::NEIGHBORHOOD.iter().filter(|&&p| p != Pos2::zero()).count(), 8);
    }
}

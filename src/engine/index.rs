use crate::board::Cell;
use std::sync::OnceLock;

/// Bit of the center cell in a 3x3 neighborhood mask
pub(super) const CENTER: usize = 1 << 4;

/// The number of arrangements of a 3x3 neighborhood
const PERMUTATIONS: usize = 1 << 9;
type LifeIndex = [Cell; PERMUTATIONS];

/// Looks up the next state of the center cell of a neighborhood mask
///
/// Bit `i` of the mask is the cell at [`Pos2::NEIGHBORHOOD`]`[i]`.
///
/// [`Pos2::NEIGHBORHOOD`]: crate::Pos2::NEIGHBORHOOD
#[inline]
pub(super) fn next_state(neighborhood: usize) -> Cell {
    get_life_index()[neighborhood & (PERMUTATIONS - 1)]
}

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_life_index`] once and storing the result
fn get_life_index() -> &'static LifeIndex {
    static CELL: OnceLock<LifeIndex> = OnceLock::new();
    CELL.get_or_init(generate_life_index)
}

/// Creates a lookup table holding the next center state for every neighborhood mask
fn generate_life_index() -> LifeIndex {
    let mut index = [Cell::Dead; PERMUTATIONS];
    for (mask, state) in index.iter_mut().enumerate() {
        let neighbors = (mask & !CENTER).count_ones();
        let alive = mask & CENTER != 0;
        *state = match (alive, neighbors) {
            (true, 2 | 3) | (false, 3) => Cell::Alive,
            _ => Cell::Dead,
        };
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(alive: bool, neighbors: usize) -> usize {
        const NEIGHBOR_BITS: [usize; 8] = [
            0b000_000_001,
            0b000_000_010,
            0b000_000_100,
            0b000_001_000,
            0b000_100_000,
            0b001_000_000,
            0b010_000_000,
            0b100_000_000,
        ];

        let mut value = if alive { CENTER } else { 0 };
        for bit in NEIGHBOR_BITS.iter().take(neighbors) {
            value |= bit;
        }
        value
    }

    #[test]
    fn survival_needs_two_or_three() {
        for neighbors in 0..=8 {
            let expected = Cell::from(neighbors == 2 || neighbors == 3);
            assert_eq!(next_state(mask(true, neighbors)), expected, "{neighbors} neighbors");
        }
    }

    #[test]
    fn birth_needs_exactly_three() {
        for neighbors in 0..=8 {
            let expected = Cell::from(neighbors == 3);
            assert_eq!(next_state(mask(false, neighbors)), expected, "{neighbors} neighbors");
        }
    }

    #[test]
    fn arrangement_does_not_matter() {
        // three neighbors along the bottom row versus one per side
        assert_eq!(next_state(0b111_000_000), Cell::Alive);
        assert_eq!(next_state(0b000_101_010), Cell::Alive);
        assert_eq!(next_state(0b100_000_001), Cell::Dead);
    }
}

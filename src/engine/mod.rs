mod index;
mod simulation;

pub use self::simulation::Simulation;
use crate::{Board, Cell, Pos2};

/// Outcome of evolving one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The next generation still has alive cells
    Continue(Board),
    /// The next generation is fully dead; it is the last one to show
    Extinct(Board),
    /// There was no board to evolve
    Halted,
}
impl Step {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue(_))
    }

    #[inline]
    pub fn into_board(self) -> Option<Board> {
        match self {
            Self::Continue(board) | Self::Extinct(board) => Some(board),
            Self::Halted => None,
        }
    }
}

/// Gathers the 3x3 neighborhood around `pos` into a 9-bit mask
///
/// Positions off the board read as dead, there is no wraparound.
fn neighborhood(board: &Board, pos: Pos2) -> usize {
    Pos2::NEIGHBORHOOD
        .iter()
        .enumerate()
        .filter(|&(_, &offset)| board.get_pos(pos + offset).is_some_and(Cell::is_alive))
        .fold(0, |mask, (bit, _)| mask | (1usize << bit))
}

/// Number of alive cells among the (up to) 8 in-bounds neighbors of `(row, col)`
pub fn alive_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let mask = neighborhood(board, Pos2::new(row, col)) & !index::CENTER;
    mask.count_ones() as u8
}

/// Computes the generation following `board`
///
/// Every cell of the result is decided from `board` alone. Returns the new board and
/// whether it is extinct (no cell alive).
pub fn evolve(board: &Board) -> (Board, bool) {
    let rows = board
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            (0..row.len())
                .map(|c| index::next_state(neighborhood(board, Pos2::new(r, c))))
                .collect()
        })
        .collect();

    let next = Board::from_rows(rows);
    let extinct = next.is_extinct();
    (next, extinct)
}

/// [`evolve`] as a tagged result, treating a missing board as the end of the game
pub fn step(board: Option<&Board>) -> Step {
    let Some(board) = board else {
        return Step::Halted;
    };

    match evolve(board) {
        (next, true) => Step::Extinct(next),
        (next, false) => Step::Continue(next),
    }
}

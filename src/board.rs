use crate::pos::Pos2;
use std::{fmt, str::FromStr};

/// The compiled-in starting pattern
const INITIAL: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 0],
    [1, 0, 0, 1, 1],
    [1, 1, 0, 0, 1],
    [0, 1, 0, 0, 0],
    [1, 0, 0, 0, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}
impl Cell {
    /// Parses a `'0'` or `'1'` character
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Dead),
            '1' => Some(Self::Alive),
            _ => None,
        }
    }
    #[inline]
    pub fn digit(self) -> char {
        match self {
            Self::Dead => '0',
            Self::Alive => '1',
        }
    }
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}
impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

/// One generation of the grid, stored as rows of cells
///
/// Boards are snapshots: the engine never writes into a board it has handed out,
/// it always allocates the next one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    #[inline]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Builds a board from rows of `0`/`1` values, any non-zero value being alive
    pub fn from_digits<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&d| Cell::from(d != 0)).collect())
            .collect();
        Self { rows }
    }

    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Dead; cols]; rows],
        }
    }

    /// The 5x5 board the simulation starts from when nothing else is given
    pub fn initial() -> Self {
        Self::from_digits(&INITIAL)
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row count and the length of the first row
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    /// The cell at `(row, col)`, [`None`] if outside the board
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).copied()
    }
    #[inline]
    pub fn get_pos(&self, pos: Pos2) -> Option<Cell> {
        let (row, col) = pos.to_row_col()?;
        self.get(row, col)
    }

    pub fn alive_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// True when no cell on the board is alive
    pub fn is_extinct(&self) -> bool {
        self.rows.iter().flatten().all(|cell| !cell.is_alive())
    }

    /// Positions of every alive cell, in reading order
    pub fn alive_positions(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(c, _)| Pos2::new(r, c))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                write!(f, "{}", cell.digit())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    Empty,
    InvalidCell { line: usize, column: usize, found: char },
}
impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no rows"),
            Self::InvalidCell {
                line,
                column,
                found,
            } => write!(
                f,
                "invalid cell {found:?} at line {line}, column {column} (expected '0' or '1')"
            ),
        }
    }
}
impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses one row of digits per line, skipping blank lines
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(j, c)| {
                    Cell::from_char(c).ok_or(ParseBoardError::InvalidCell {
                        line: i + 1,
                        column: j + 1,
                        found: c,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        Ok(Self { rows })
    }
}

//! Core library for a bounded-grid Game of Life that runs until every cell is dead.

pub mod board;
pub mod enc;
pub mod engine;
pub mod pos;
pub mod print;

pub use board::{Board, Cell, ParseBoardError};
pub use enc::{BoardCodec, DecodeError, PlainDigits, RunLengthEncoded};
pub use engine::{Simulation, Step, alive_neighbors, evolve, step};
pub use pos::Pos2;
pub use print::{print_board, write_board};

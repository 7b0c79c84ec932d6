use super::{Step, step};
use crate::Board;
use std::mem;

#[derive(Debug)]
enum State {
    /// Shows this board, then evolves it
    Running(Board),
    /// The extinct board still has to be shown once
    Final(Board),
    Done,
}

/// Drives a board from its initial generation until extinction
///
/// As an iterator it yields every board that should be shown, in order: the
/// initial board, each living successor, and finally the extinct board. Patterns
/// that never die out run forever unless a generation limit is set.
#[derive(Debug)]
pub struct Simulation {
    state: State,
    generation: usize,
    limit: Option<usize>,
}

impl Simulation {
    pub fn new(initial: Board) -> Self {
        Self {
            state: State::Running(initial),
            generation: 0,
            limit: None,
        }
    }

    /// Stops after `limit` evolutions, yielding at most `limit + 1` boards
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of evolutions performed so far
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.generation >= limit)
    }
}

impl From<Option<Board>> for Simulation {
    /// A missing board produces a simulation with nothing to show
    fn from(initial: Option<Board>) -> Self {
        match initial {
            Some(board) => Self::new(board),
            None => Self {
                state: State::Done,
                generation: 0,
                limit: None,
            },
        }
    }
}

impl Iterator for Simulation {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, State::Done) {
            State::Running(board) => {
                if self.limit_reached() {
                    log::info!("stopping at generation limit {}", self.generation);
                    return Some(board);
                }

                self.generation += 1;
                self.state = match step(Some(&board)) {
                    Step::Continue(next) => {
                        log::trace!("generation {}: {} alive", self.generation, next.alive_count());
                        State::Running(next)
                    }
                    Step::Extinct(next) => {
                        log::info!("all cells dead after {} generations", self.generation);
                        State::Final(next)
                    }
                    Step::Halted => State::Done,
                };
                Some(board)
            }
            State::Final(board) => Some(board),
            State::Done => None,
        }
    }
}

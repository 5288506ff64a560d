//! State module - the dual representation behind a board
//!
//! A [`BoardState`] pairs the spatial truth (the grid) with the temporal
//! truth (the history). The two are only ever mutated together, through the
//! transition operations here, so that History Validity holds by
//! construction: replaying the history from empty always reproduces the grid.
//!
//! `BoardState` is a plain value. The thread-safe [`Board`](crate::Board)
//! wraps one in a lock; the same type also serves as the public snapshot and
//! as the payload of the history-mismatch error, so all three share one
//! equality rule.

use std::fmt;

use dropfour_types::{Disc, COLS};

use crate::error::BoardError;
use crate::grid::Grid;
use crate::history::{History, Move};

/// A full picture of a board at one point in time: grid plus the move
/// sequence that produced it
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub grid: Grid,
    pub history: History,
}

impl BoardState {
    /// Create an empty state: no moves, all cells empty
    pub fn new() -> Self {
        Self::default()
    }

    /// The disc that moves next, derived from history parity
    ///
    /// This is the lock-free variant of [`crate::Board::next_turn`] for
    /// callers already inside a critical section; the lock is not reentrant.
    pub fn next_disc(&self) -> Disc {
        self.history.next_disc()
    }

    /// Drop the next player's disc into a column
    ///
    /// Scans the column bottom-up for the first empty cell; on success writes
    /// the disc there and appends the move, returning the mover and the
    /// landing row. Fails with [`BoardError::FullColumn`] when the column has
    /// no empty cell, leaving the state untouched.
    ///
    /// # Panics
    ///
    /// Panics if `col >= COLS`. An out-of-range column is a precondition
    /// violation, not a recoverable error.
    pub fn drop_disc(&mut self, col: usize) -> Result<(Disc, usize), BoardError> {
        let mover = self.next_disc();
        let row = self
            .grid
            .first_empty_row(col)
            .ok_or(BoardError::FullColumn(col))?;

        self.grid.set(col, row, mover);
        self.history.push(Move::new(col));
        Ok((mover, row))
    }

    /// Unmake the most recent move
    ///
    /// Takes the last column from the history and the disc that move must
    /// have placed (the inverse of whoever moves next), then scans that
    /// column top-down. If the highest occupied cell holds the expected disc
    /// it is cleared and the history entry popped; anything else proves the
    /// grid and history have diverged and fails with
    /// [`BoardError::HistoryMismatch`] carrying a snapshot of this state.
    /// Errors never mutate.
    pub fn undo_move(&mut self) -> Result<(), BoardError> {
        let last = self.history.last().ok_or(BoardError::EmptyBoard)?;
        let expected = self.next_disc().invert();

        match self.grid.top_disc(last.column()) {
            Some((row, disc)) if disc == expected => {
                self.grid.set(last.column(), row, Disc::Empty);
                self.history.pop();
                Ok(())
            }
            _ => Err(BoardError::HistoryMismatch(Box::new(self.clone()))),
        }
    }

    /// History Validity check: replay the history from an empty grid and
    /// compare the result to the stored grid
    pub fn is_consistent(&self) -> bool {
        let mut replay = Self::new();
        for m in self.history.moves() {
            if m.column() >= COLS || replay.drop_disc(m.column()).is_err() {
                return false;
            }
        }
        replay.grid == self.grid
    }
}

impl fmt::Display for BoardState {
    /// Grid rendering first, then the history line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.grid, self.history)
    }
}

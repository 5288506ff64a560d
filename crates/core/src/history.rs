//! History module - the board's temporal state
//!
//! A move is just a column choice; the row is implied by the drop rule. The
//! history is the ordered sequence of those choices, and its length parity is
//! the single source of truth for whose turn it is: even indices are Red's
//! moves, odd indices Blue's, so an even-length history means Red moves next.

use std::fmt;

use arrayvec::ArrayVec;
use dropfour_types::{Disc, COLS, ROWS};

/// Maximum number of moves a game can hold - one per grid cell
pub const MAX_MOVES: usize = COLS * ROWS;

/// One move: the chosen column
///
/// No range validation happens at construction; validity is contextual and
/// checked (or panicked on) where the move meets a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u8);

impl Move {
    /// Create a move for the given column
    pub fn new(col: usize) -> Self {
        Self(col as u8)
    }

    /// The chosen column index
    pub fn column(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of moves, append-only in normal play
///
/// Backed by a fixed-capacity vector bounded by the grid size, so a history
/// never allocates and never outgrows the board it describes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct History {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from a sequence of column indices, first move first
    pub fn from_columns(columns: &[usize]) -> Self {
        let mut history = Self::new();
        for &col in columns {
            history.push(Move::new(col));
        }
        history
    }

    /// Append a move
    ///
    /// # Panics
    ///
    /// Panics if the history already holds [`MAX_MOVES`] moves. The board
    /// only appends after finding an empty grid cell, so the capacity can
    /// never be exceeded through its operations.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Remove and return the most recent move
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// The most recent move without removing it
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Number of moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if no moves have been played
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All moves in play order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The disc that moves next: even move count means Red, odd means Blue
    pub fn next_disc(&self) -> Disc {
        Self::disc_at(self.len())
    }

    /// The disc that made (or will make) the move at a given history index
    pub fn disc_at(index: usize) -> Disc {
        if index % 2 == 0 {
            Disc::Red
        } else {
            Disc::Blue
        }
    }
}

impl fmt::Display for History {
    /// Render the moves as labeled, arrow-joined column numbers:
    /// `RED 1 ⇨ BLU 2 ⇨ RED 3`, or `NO MOVES` when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NO MOVES");
        }

        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ⇨ ")?;
            }
            write!(f, "{} {}", Self::disc_at(i), m)?;
        }
        Ok(())
    }
}

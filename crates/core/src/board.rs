//! Board module - the thread-safe game engine
//!
//! A [`Board`] owns one [`BoardState`] behind a reader/writer lock. Readers
//! (turn query, equality, formatting, snapshots) share the lock; writers
//! (drop, turn-checked drop, undo) hold it exclusively across the whole
//! read-scan-mutate sequence, so no thread can ever observe a half-applied
//! move. Lock hold times are bounded by a single column scan.
//!
//! `Board` is deliberately not `Clone`: duplicating the lock would break
//! mutual exclusion. Threads share one instance via `Arc<Board>` or borrows.

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use dropfour_types::Disc;

use crate::error::BoardError;
use crate::state::BoardState;

/// A thread-safe dual-representation board: grid state plus the move history
/// that produced it, mutated only as a paired transaction
#[derive(Debug, Default)]
pub struct Board {
    state: RwLock<BoardState>,
}

impl Board {
    /// Create a new empty board: zero history, all cells empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a board from a snapshot
    ///
    /// The caller is responsible for the snapshot's validity; a diverged
    /// grid/history pair is accepted here and surfaces later as a
    /// [`BoardError::HistoryMismatch`] on undo. [`BoardState::is_consistent`]
    /// checks a snapshot beforehand.
    pub fn from_state(state: BoardState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    // Writers never unwind mid-transaction (the only panic point, an
    // out-of-range column, fires before any write), so a poisoned lock still
    // guards consistent data and the guard is safe to recover.
    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The disc that moves next: Red on an even move count, Blue on odd
    pub fn next_turn(&self) -> Disc {
        self.read().next_disc()
    }

    /// Drop the next player's disc into a column, Connect-Four style
    ///
    /// Returns the mover and the landing row (the lowest empty cell), or
    /// [`BoardError::FullColumn`] when the column has no room. Turn
    /// derivation, the column scan, and the grid/history mutation all happen
    /// under one exclusive lock.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range; callers validate the column first.
    pub fn drop_disc(&self, col: usize) -> Result<(Disc, usize), BoardError> {
        self.write().drop_disc(col)
    }

    /// Drop a disc on behalf of a specific player
    ///
    /// Rejects with [`BoardError::OutOfTurn`] when it is not `player`'s
    /// turn, before the drop is attempted; a wrong-turn call on a full
    /// column reports the turn error, not the full column. Returns the
    /// landing row only.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of range; callers validate the column first.
    pub fn drop_disc_as(&self, player: Disc, col: usize) -> Result<usize, BoardError> {
        let mut state = self.write();
        if state.next_disc() != player {
            return Err(BoardError::OutOfTurn(player));
        }

        let (_, row) = state.drop_disc(col)?;
        Ok(row)
    }

    /// Unmake the most recent move, shrinking grid and history together
    ///
    /// Fails with [`BoardError::EmptyBoard`] on a board with no history, or
    /// with [`BoardError::HistoryMismatch`] when the grid does not show the
    /// disc the history says was placed last. Errors never mutate; repeated
    /// successful calls walk the board back to empty.
    pub fn undo_move(&self) -> Result<(), BoardError> {
        self.write().undo_move()
    }

    /// A value copy of the current state, safe to inspect without the lock
    pub fn snapshot(&self) -> BoardState {
        self.read().clone()
    }

    /// Number of moves played so far
    pub fn moves_played(&self) -> usize {
        self.read().history.len()
    }

    /// True if no moves have been played
    pub fn is_empty(&self) -> bool {
        self.read().history.is_empty()
    }
}

impl PartialEq for Board {
    /// Value equality: grids match and histories match element-wise
    ///
    /// Locks both operands in address order, lowest first, so two threads
    /// comparing the same pair of boards in opposite argument order can
    /// never deadlock. Comparing a board against itself short-circuits
    /// without locking; reacquiring a non-reentrant read lock could deadlock
    /// against a queued writer.
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        let (first, second) = if (self as *const Board) < (other as *const Board) {
            (self, other)
        } else {
            (other, self)
        };

        let a = first.read();
        let b = second.read();
        *a == *b
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// Grid rows top to bottom, then the history line; read-only
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().fmt(f)
    }
}

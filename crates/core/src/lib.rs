//! Core board engine - pure, deterministic, and thread-safe
//!
//! This crate implements a column-drop (Connect-Four-style) game board with
//! a dual representation of truth: the **grid** holds the spatial state,
//! while the **history** holds the complete move sequence that produced it.
//! The history gives full knowledge of the game for analysis; the grid
//! avoids reconstructing the position on every read. Because the two can
//! fall out of sync if managed carelessly, all moves go through constrained
//! operations that update both as one transaction, and a reader/writer lock
//! makes every [`Board`] safe to share across threads.
//!
//! # Module Structure
//!
//! - [`grid`]: 7x6 spatial state with bottom-up columns
//! - [`history`]: the ordered move sequence and turn parity
//! - [`state`]: the grid/history pair and its transition operations
//! - [`board`]: the lock-guarded engine
//! - [`error`]: the failure taxonomy
//! - [`rng`]: deterministic random disc generation
//!
//! # Validity
//!
//! Boards are held to three nested standards:
//!
//! - **Drop Validity**: no occupied cell sits above an empty one
//! - **Turn Validity**: discs strictly alternate, Red first, consistent with
//!   move-count parity
//! - **History Validity**: replaying the history from an empty grid
//!   reproduces the stored grid exactly
//!
//! Every board built purely through [`Board`] operations satisfies all three
//! by construction; [`BoardState::is_consistent`] checks History Validity
//! for states of unknown origin.
//!
//! # Example
//!
//! ```
//! use dropfour_core::{Board, BoardError};
//! use dropfour_core::types::Disc;
//!
//! let board = Board::new();
//!
//! // Red opens, Blue answers in the same column.
//! assert_eq!(board.drop_disc(3), Ok((Disc::Red, 0)));
//! assert_eq!(board.drop_disc_as(Disc::Blue, 3), Ok(1));
//!
//! // Out-of-turn moves are rejected before anything mutates.
//! assert_eq!(board.drop_disc_as(Disc::Blue, 3), Err(BoardError::OutOfTurn(Disc::Blue)));
//!
//! // Undo walks the game back one paired grid/history step.
//! board.undo_move().unwrap();
//! assert_eq!(board.moves_played(), 1);
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod history;
pub mod rng;
pub mod state;

pub use dropfour_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use grid::Grid;
pub use history::{History, Move, MAX_MOVES};
pub use rng::{random_disc, SimpleRng};
pub use state::BoardState;

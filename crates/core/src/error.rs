//! Error module - the board's failure taxonomy
//!
//! Every failure is local and non-fatal, returned synchronously to the
//! caller with the state unchanged. The one programmer-error condition, an
//! out-of-range column index, is a precondition and panics instead.

use dropfour_types::Disc;
use thiserror::Error;

use crate::state::BoardState;

/// Everything that can go wrong with a board operation
///
/// Values compare by payload: two [`HistoryMismatch`](BoardError::HistoryMismatch)
/// errors are equal exactly when their snapshots are value-equal (same grid,
/// same move sequence).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A drop targeted a column with no empty cell left
    #[error("column {0} is full and cannot accept any more pieces")]
    FullColumn(usize),

    /// A turn-checked move was requested by the wrong player; carries the
    /// requesting player. Checked before column capacity, so this takes
    /// precedence over [`FullColumn`](BoardError::FullColumn).
    #[error("attempted to move {0} out of turn")]
    OutOfTurn(Disc),

    /// An undo was attempted with no history to undo
    #[error("board is empty")]
    EmptyBoard,

    /// An undo proved that grid and history have diverged; carries a
    /// snapshot of the offending board for diagnosis
    #[error(
        "board history does not match board state\nState:\n{}\nHistory:\n{}",
        .0.grid,
        .0.history
    )]
    HistoryMismatch(Box<BoardState>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BoardError::FullColumn(5).to_string(),
            "column 5 is full and cannot accept any more pieces"
        );
        assert_eq!(
            BoardError::OutOfTurn(Disc::Red).to_string(),
            "attempted to move RED out of turn"
        );
        assert_eq!(BoardError::EmptyBoard.to_string(), "board is empty");
    }

    #[test]
    fn test_mismatch_display_carries_snapshot() {
        let mut state = BoardState::new();
        state.drop_disc(2).unwrap();

        let rendered = BoardError::HistoryMismatch(Box::new(state)).to_string();
        assert!(rendered.starts_with("board history does not match board state\nState:\n"));
        assert!(rendered.contains("| --- | --- | RED |"));
        assert!(rendered.ends_with("History:\nRED 2"));
    }

    #[test]
    fn test_mismatch_equality_is_by_snapshot_value() {
        let mut a = BoardState::new();
        a.drop_disc(3).unwrap();
        let b = a.clone();

        assert_eq!(
            BoardError::HistoryMismatch(Box::new(a.clone())),
            BoardError::HistoryMismatch(Box::new(b))
        );

        let mut diverged = a.clone();
        diverged.history = History::from_columns(&[3, 4]);
        assert_ne!(
            BoardError::HistoryMismatch(Box::new(a)),
            BoardError::HistoryMismatch(Box::new(diverged))
        );
    }
}

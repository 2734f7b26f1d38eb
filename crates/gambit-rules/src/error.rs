//! Errors raised while restoring a game from a snapshot.

use gambit_core::{BoardError, Color, Square};

/// Errors that can occur when replaying a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// A piece record names a square outside the 8x8 grid.
    #[error("piece record at ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Recorded row.
        row: i8,
        /// Recorded column.
        col: i8,
    },

    /// Two piece records share a square.
    #[error("more than one piece on {square}")]
    SquareTaken {
        /// The contested square.
        square: Square,
    },

    /// The replayed position fails structural validation.
    #[error("invalid position: {0}")]
    Board(#[from] BoardError),

    /// The side that just moved would still be in check.
    #[error("{color} is not to move but is in check")]
    OpponentInCheck {
        /// The side not to move.
        color: Color,
    },
}

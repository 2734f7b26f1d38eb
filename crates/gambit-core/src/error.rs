//! Error types for board access, move application and consistency checks.

use std::fmt;

use crate::color::Color;
use crate::piece::PieceId;
use crate::square::Square;

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The piece belongs to the side that is not on move.
    NotYourTurn,
    /// The destination is not among the piece's pseudo-legal destinations.
    Unreachable,
    /// The move would leave the mover's own king attacked.
    LeavesKingInCheck,
    /// The game has already ended in checkmate or stalemate.
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::NotYourTurn => "not that side's turn",
            IllegalMoveReason::Unreachable => "destination not reachable",
            IllegalMoveReason::LeavesKingInCheck => "own king would be in check",
            IllegalMoveReason::GameOver => "game is over",
        };
        f.write_str(text)
    }
}

/// Errors returned by board access and game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A coordinate lies outside the 8x8 grid.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i8,
        /// Requested column.
        col: i8,
    },

    /// The move request was refused.
    #[error("illegal move of {piece} to {to}: {reason}")]
    IllegalMove {
        /// Piece the caller tried to move.
        piece: PieceId,
        /// Requested destination.
        to: Square,
        /// Why the request was refused.
        reason: IllegalMoveReason,
    },

    /// The piece id is unknown or names a captured piece.
    #[error("invalid piece reference: {piece}")]
    InvalidPieceReference {
        /// The offending id.
        piece: PieceId,
    },

    /// `undo` was called with an empty move history.
    #[error("no move to undo")]
    NothingToUndo,

    /// Board and piece table disagree after a mutation.
    #[error("inconsistent game state: {0}")]
    Inconsistent(#[from] BoardError),
}

/// Errors from structural validation of a board against its piece table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one live king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of live kings found.
        count: usize,
    },
    /// A square points at a piece that is captured or unknown.
    #[error("square {square} references a dead or unknown piece")]
    DanglingOccupant {
        /// The square holding the stale reference.
        square: Square,
    },
    /// A square points at a piece that believes it stands elsewhere.
    #[error("square {square} and its occupant disagree on position")]
    MisplacedPiece {
        /// The square holding the reference.
        square: Square,
    },
    /// A live piece is not referenced by the square it claims to occupy.
    #[error("live piece {piece} is missing from the board")]
    MissingPiece {
        /// The unreferenced piece.
        piece: PieceId,
    },
}

//! Serializable position snapshots for save/load collaborators.
//!
//! A snapshot lists the live pieces and the side to move. Restoring replays
//! the records into a fresh [`GameState`]; piece ids are reassigned in record
//! order and the move history starts empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use gambit_core::{Board, Color, PieceKind, PieceSet, Square};

use crate::check;
use crate::error::SnapshotError;
use crate::game::GameState;

/// One live piece as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub kind: PieceKind,
    pub color: Color,
    pub row: i8,
    pub col: i8,
}

/// A persisted position: live pieces plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub side_to_move: Color,
    pub pieces: Vec<PieceRecord>,
}

impl GameState {
    /// Capture the live pieces (in table order) and the side to move.
    pub fn snapshot(&self) -> Snapshot {
        let pieces = self
            .pieces()
            .iter_live()
            .filter_map(|p| {
                let sq = p.square()?;
                Some(PieceRecord {
                    kind: p.kind(),
                    color: p.color(),
                    row: sq.row() as i8,
                    col: sq.col() as i8,
                })
            })
            .collect();
        Snapshot {
            side_to_move: self.current_player(),
            pieces,
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// # Errors
    ///
    /// Fails if a record is off the board, two records share a square, a
    /// side does not have exactly one king, or the side not to move is in
    /// check.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<GameState, SnapshotError> {
        let mut board = Board::empty();
        let mut pieces = PieceSet::new();

        for record in &snapshot.pieces {
            let square = Square::checked(record.row, record.col).ok_or(SnapshotError::OutOfBounds {
                row: record.row,
                col: record.col,
            })?;
            if board.is_occupied(square) {
                return Err(SnapshotError::SquareTaken { square });
            }
            let id = pieces.spawn(record.kind, record.color, square);
            board.place(square, id);
        }
        board.validate(&pieces)?;

        let state = GameState::from_parts(board, pieces, snapshot.side_to_move);
        let waiting = snapshot.side_to_move.flip();
        if check::is_in_check(&state, waiting) {
            return Err(SnapshotError::OpponentInCheck { color: waiting });
        }

        debug!(
            pieces = snapshot.pieces.len(),
            side_to_move = %snapshot.side_to_move,
            status = %state.status(),
            "restored snapshot"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::BoardError;

    fn record(kind: PieceKind, color: Color, row: i8, col: i8) -> PieceRecord {
        PieceRecord { kind, color, row, col }
    }

    fn kings() -> Vec<PieceRecord> {
        vec![
            record(PieceKind::King, Color::White, 7, 4),
            record(PieceKind::King, Color::Black, 0, 4),
        ]
    }

    #[test]
    fn start_position_snapshot_lists_all_pieces() {
        let snap = GameState::new().snapshot();
        assert_eq!(snap.pieces.len(), 32);
        assert_eq!(snap.side_to_move, Color::White);
    }

    #[test]
    fn snapshot_skips_captured_pieces() {
        let mut state = GameState::new();
        let e_pawn = state.piece_at(Square::new(6, 4).unwrap()).unwrap().id();
        let d_pawn = state.piece_at(Square::new(1, 3).unwrap()).unwrap().id();
        state.apply_move(e_pawn, Square::new(4, 4).unwrap()).unwrap();
        state.apply_move(d_pawn, Square::new(3, 3).unwrap()).unwrap();
        state.apply_move(e_pawn, Square::new(3, 3).unwrap()).unwrap();

        let snap = state.snapshot();
        assert_eq!(snap.pieces.len(), 31);
        assert_eq!(snap.side_to_move, Color::Black);
    }

    #[test]
    fn restore_matches_grid_and_turn() {
        let mut state = GameState::new();
        let knight = state.piece_at(Square::new(7, 6).unwrap()).unwrap().id();
        state.apply_move(knight, Square::new(5, 5).unwrap()).unwrap();

        let restored = GameState::from_snapshot(&state.snapshot()).unwrap();
        assert_eq!(restored.grid(), state.grid());
        assert_eq!(restored.current_player(), state.current_player());
        assert!(restored.history().is_empty());
    }

    #[test]
    fn off_board_record_rejected() {
        let mut pieces = kings();
        pieces.push(record(PieceKind::Rook, Color::White, 8, 0));
        let err = GameState::from_snapshot(&Snapshot { side_to_move: Color::White, pieces }).unwrap_err();
        assert_eq!(err, SnapshotError::OutOfBounds { row: 8, col: 0 });
    }

    #[test]
    fn duplicate_square_rejected() {
        let mut pieces = kings();
        pieces.push(record(PieceKind::Rook, Color::White, 7, 4));
        let err = GameState::from_snapshot(&Snapshot { side_to_move: Color::White, pieces }).unwrap_err();
        assert_eq!(err, SnapshotError::SquareTaken { square: Square::new(7, 4).unwrap() });
    }

    #[test]
    fn missing_king_rejected() {
        let pieces = vec![record(PieceKind::King, Color::White, 7, 4)];
        let err = GameState::from_snapshot(&Snapshot { side_to_move: Color::White, pieces }).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::Board(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );
    }

    #[test]
    fn side_not_to_move_in_check_rejected() {
        let mut pieces = kings();
        pieces.push(record(PieceKind::Rook, Color::White, 3, 4));
        let err = GameState::from_snapshot(&Snapshot { side_to_move: Color::White, pieces }).unwrap_err();
        assert_eq!(err, SnapshotError::OpponentInCheck { color: Color::Black });
    }
}

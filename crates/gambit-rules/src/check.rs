//! King safety: check, legal-move filtering, checkmate and stalemate.
//!
//! Every candidate move is tried on a scratch copy of the board and piece
//! table. The opponent's destinations are recomputed on the copy and the
//! mover's king square is tested against them. The authoritative state is
//! never touched.

use gambit_core::movegen;
use gambit_core::{Color, PieceId, Square};

use crate::game::{GameState, GameStatus, relocate};

/// Return `true` if `player`'s king stands on a square some live opposing
/// piece can move to.
///
/// A side without a king on the board is never in check.
pub fn is_in_check(state: &GameState, player: Color) -> bool {
    state
        .king_square(player)
        .is_some_and(|king| movegen::attacks_square(state.pieces(), player.flip(), king))
}

/// Return `true` if moving `id` to `to` leaves its own king unattacked.
///
/// `to` is assumed to be one of the piece's pseudo-legal destinations.
pub fn keeps_king_safe(state: &GameState, id: PieceId, to: Square) -> bool {
    let Some(color) = state.pieces().live(id).map(|p| p.color()) else {
        return false;
    };

    let mut board = *state.board();
    let mut pieces = state.pieces().clone();
    relocate(&mut board, &mut pieces, id, to);
    movegen::recompute(&board, &mut pieces, Some(color.flip()));

    pieces
        .king(color)
        .and_then(|k| k.square())
        .is_none_or(|king| !movegen::attacks_square(&pieces, color.flip(), king))
}

/// Return the destinations of `id` that keep its own king safe.
pub fn legal_destinations(state: &GameState, id: PieceId) -> Vec<Square> {
    let Some(piece) = state.pieces().live(id) else {
        return Vec::new();
    };
    piece
        .moves()
        .iter()
        .copied()
        .filter(|&to| keeps_king_safe(state, id, to))
        .collect()
}

/// Return every legal `(piece, destination)` pair for `player`.
pub fn legal_moves(state: &GameState, player: Color) -> Vec<(PieceId, Square)> {
    state
        .pieces()
        .iter_live()
        .filter(|p| p.color() == player)
        .flat_map(|p| {
            let id = p.id();
            legal_destinations(state, id).into_iter().map(move |to| (id, to))
        })
        .collect()
}

/// Return `true` if `player` has at least one legal move. Stops at the
/// first one found.
pub fn has_legal_move(state: &GameState, player: Color) -> bool {
    state
        .pieces()
        .iter_live()
        .filter(|p| p.color() == player)
        .any(|p| p.moves().iter().any(|&to| keeps_king_safe(state, p.id(), to)))
}

/// Return `true` if `player` is in check and no move escapes it.
pub fn is_checkmate(state: &GameState, player: Color) -> bool {
    is_in_check(state, player) && !has_legal_move(state, player)
}

/// Return `true` if `player` is not in check but has no legal move.
pub fn is_stalemate(state: &GameState, player: Color) -> bool {
    !is_in_check(state, player) && !has_legal_move(state, player)
}

/// Classify the position for the side to move.
pub fn evaluate(state: &GameState) -> GameStatus {
    let player = state.current_player();
    match (is_in_check(state, player), has_legal_move(state, player)) {
        (true, true) => GameStatus::Check(player),
        (true, false) => GameStatus::Checkmate(player),
        (false, true) => GameStatus::InProgress,
        (false, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{PieceRecord, Snapshot};
    use gambit_core::PieceKind::{self, *};
    use gambit_core::Color::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn game(side_to_move: Color, layout: &[(PieceKind, Color, i8, i8)]) -> GameState {
        let pieces = layout
            .iter()
            .map(|&(kind, color, row, col)| PieceRecord { kind, color, row, col })
            .collect();
        GameState::from_snapshot(&Snapshot { side_to_move, pieces }).unwrap()
    }

    fn id_at(state: &GameState, row: i8, col: i8) -> PieceId {
        state.piece_at(sq(row, col)).unwrap().id()
    }

    #[test]
    fn start_position_is_quiet() {
        let state = GameState::new();
        assert!(!is_in_check(&state, White));
        assert!(!is_in_check(&state, Black));
        assert_eq!(evaluate(&state), GameStatus::InProgress);
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let state = game(White, &[(King, White, 7, 4), (Rook, Black, 0, 4), (King, Black, 0, 0)]);
        assert!(is_in_check(&state, White));
        assert!(!is_checkmate(&state, White));
        assert_eq!(state.status(), GameStatus::Check(White));
    }

    #[test]
    fn blocker_removes_check() {
        let state = game(
            White,
            &[(King, White, 7, 4), (Bishop, White, 5, 4), (Rook, Black, 0, 4), (King, Black, 0, 0)],
        );
        assert!(!is_in_check(&state, White));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let state = game(
            White,
            &[(King, White, 7, 4), (Knight, White, 6, 4), (Rook, Black, 0, 4), (King, Black, 0, 0)],
        );
        let knight = id_at(&state, 6, 4);
        assert!(!state.piece(knight).unwrap().moves().is_empty());
        assert!(legal_destinations(&state, knight).is_empty());
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let state = game(White, &[(King, White, 7, 4), (Rook, Black, 0, 3), (King, Black, 0, 7)]);
        let king = id_at(&state, 7, 4);
        let moves = legal_destinations(&state, king);
        assert!(!moves.contains(&sq(7, 3)));
        assert!(!moves.contains(&sq(6, 3)));
        assert!(moves.contains(&sq(7, 5)));
    }

    #[test]
    fn capturing_the_checker_escapes() {
        let state = game(
            White,
            &[(King, White, 7, 7), (Queen, Black, 6, 6), (Bishop, White, 5, 5), (King, Black, 0, 7)],
        );
        let bishop = id_at(&state, 5, 5);
        assert!(is_in_check(&state, White));
        assert_eq!(legal_destinations(&state, bishop), vec![sq(6, 6)]);
    }

    #[test]
    fn back_rank_mate() {
        let state = game(
            White,
            &[
                (King, White, 7, 6),
                (Pawn, White, 6, 5),
                (Pawn, White, 6, 6),
                (Pawn, White, 6, 7),
                (Rook, Black, 7, 0),
                (King, Black, 0, 6),
            ],
        );
        assert!(is_checkmate(&state, White));
        assert!(legal_moves(&state, White).is_empty());
        assert_eq!(state.status(), GameStatus::Checkmate(White));
    }

    #[test]
    fn cornered_king_stalemate() {
        let state = game(Black, &[(King, Black, 0, 7), (Queen, White, 2, 6), (King, White, 2, 5)]);
        assert!(!is_in_check(&state, Black));
        assert!(is_stalemate(&state, Black));
        assert_eq!(state.status(), GameStatus::Stalemate);
    }

    #[test]
    fn king_and_pawn_are_not_stalemated() {
        let state = game(Black, &[(King, Black, 0, 0), (King, White, 7, 7), (Pawn, Black, 1, 7)]);
        assert!(!is_stalemate(&state, Black));
        assert!(has_legal_move(&state, Black));
    }
}

//! Pseudo-legal move generation.
//!
//! Destinations here obey piece movement, blocking and capture rules but do
//! not account for the mover's own king safety. Filtering by king safety is
//! done by the rules layer through simulation.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceSet};
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_slider};

/// What a destination square holds relative to the moving side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Empty,
    Enemy,
    Friendly,
}

/// Classify `sq` from the point of view of a `color` piece.
fn target(board: &Board, pieces: &PieceSet, color: Color, sq: Square) -> Target {
    match board.color_on(pieces, sq) {
        None => Target::Empty,
        Some(c) if c == color => Target::Friendly,
        Some(_) => Target::Enemy,
    }
}

/// Push every on-board, non-friendly square at a fixed offset from `from`.
fn gen_steps(
    board: &Board,
    pieces: &PieceSet,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        let Some(dst) = from.offset(dr, dc) else {
            continue;
        };
        if target(board, pieces, color, dst) != Target::Friendly {
            out.push(dst);
        }
    }
}

/// Return the pseudo-legal destinations of `piece` on `board`.
///
/// Captured pieces have no destinations.
pub fn destinations(board: &Board, pieces: &PieceSet, piece: &Piece) -> Vec<Square> {
    let Some(from) = piece.square() else {
        return Vec::new();
    };
    let color = piece.color();
    let mut out = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, pieces, from, color, &mut out),
        PieceKind::Knight => gen_knight(board, pieces, from, color, &mut out),
        PieceKind::Bishop => gen_slider(board, pieces, from, color, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, pieces, from, color, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, pieces, from, color, &ORTHOGONALS, &mut out);
            gen_slider(board, pieces, from, color, &DIAGONALS, &mut out);
        }
        PieceKind::King => gen_king(board, pieces, from, color, &mut out),
    }
    out
}

/// Replace the cached destinations of every piece of `side` (or of every
/// piece when `side` is `None`).
///
/// Captured pieces end up with an empty cache.
pub fn recompute(board: &Board, pieces: &mut PieceSet, side: Option<Color>) {
    let ids: Vec<_> = pieces
        .iter()
        .filter(|p| side.is_none_or(|c| p.color() == c))
        .map(Piece::id)
        .collect();

    for id in ids {
        let moves = match pieces.get(id) {
            Some(piece) => destinations(board, pieces, piece),
            None => continue,
        };
        if let Some(piece) = pieces.get_mut(id) {
            piece.set_moves(moves);
        }
    }
    trace!(?side, "recomputed destinations");
}

/// Return `true` if any live piece of `by` has `sq` among its cached
/// destinations.
///
/// Pawn pushes are included in the caches but never land on an occupied
/// square, so for an occupied `sq` this is exactly "attacked by `by`".
pub fn attacks_square(pieces: &PieceSet, by: Color, sq: Square) -> bool {
    pieces
        .iter_live()
        .filter(|p| p.color() == by)
        .any(|p| p.moves().contains(&sq))
}

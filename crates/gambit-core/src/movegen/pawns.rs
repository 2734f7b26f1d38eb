//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceSet;
use crate::square::Square;

use super::{Target, target};

/// Generate pseudo-legal pawn destinations.
///
/// Pushes need empty squares; the double push is only available from the
/// home row and needs both squares clear. Diagonals are captures only.
pub(super) fn gen_pawn(board: &Board, pieces: &PieceSet, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.forward();

    if let Some(one) = from.offset(dir, 0)
        && !board.is_occupied(one)
    {
        out.push(one);
        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(dir, 0)
            && !board.is_occupied(two)
        {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc)
            && target(board, pieces, color, diag) == Target::Enemy
        {
            out.push(diag);
        }
    }
}

//! King move generation. Castling is not generated.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceSet;
use crate::square::Square;

use super::gen_steps;

/// The eight unit steps around a square.
pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate pseudo-legal king destinations.
pub(super) fn gen_king(board: &Board, pieces: &PieceSet, from: Square, color: Color, out: &mut Vec<Square>) {
    gen_steps(board, pieces, from, color, &KING_OFFSETS, out);
}

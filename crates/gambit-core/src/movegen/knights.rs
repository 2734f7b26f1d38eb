//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceSet;
use crate::square::Square;

use super::gen_steps;

/// The eight (row, col) knight jumps.
pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate pseudo-legal knight destinations.
pub(super) fn gen_knight(board: &Board, pieces: &PieceSet, from: Square, color: Color, out: &mut Vec<Square>) {
    gen_steps(board, pieces, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::color::Color::*;
    use crate::movegen::tests::{moves_from, position, sq};
    use crate::piece_kind::PieceKind::*;

    #[test]
    fn centre_knight_has_eight_jumps() {
        let (board, pieces) = position(&[(Knight, White, 4, 4)]);
        assert_eq!(moves_from(&board, &pieces, 4, 4).len(), 8);
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let (board, pieces) = position(&[(Knight, Black, 0, 0)]);
        assert_eq!(moves_from(&board, &pieces, 0, 0), vec![sq(1, 2), sq(2, 1)]);
    }

    #[test]
    fn jumps_over_pieces_and_skips_friends() {
        let (board, pieces) = position(&[
            (Knight, White, 7, 1),
            (Pawn, White, 6, 1),
            (Pawn, White, 6, 2),
            (Pawn, White, 6, 3),
            (Bishop, Black, 5, 2),
        ]);
        // (6, 3) is friendly; (5, 0) is empty; (5, 2) holds an enemy.
        assert_eq!(moves_from(&board, &pieces, 7, 1), vec![sq(5, 0), sq(5, 2)]);
    }
}

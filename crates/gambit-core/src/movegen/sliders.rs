//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceSet;
use crate::square::Square;

use super::{Target, target};

/// Up, down, left, right.
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal directions.
pub(super) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walk each ray from `from` until the edge or the first occupied square.
///
/// Empty squares are destinations. The blocker is a destination only when it
/// is an enemy.
pub(super) fn gen_slider(
    board: &Board,
    pieces: &PieceSet,
    from: Square,
    color: Color,
    rays: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in rays {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc) {
            match target(board, pieces, color, next) {
                Target::Empty => out.push(next),
                Target::Enemy => {
                    out.push(next);
                    break;
                }
                Target::Friendly => break,
            }
            cursor = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color::*;
    use crate::movegen::tests::{moves_from, position, sorted, sq};
    use crate::piece_kind::PieceKind::*;

    #[test]
    fn rook_on_empty_board_sees_fourteen() {
        let (board, pieces) = position(&[(Rook, White, 4, 3)]);
        assert_eq!(moves_from(&board, &pieces, 4, 3).len(), 14);
    }

    #[test]
    fn rook_stops_at_first_blocker_in_every_direction() {
        let (board, pieces) = position(&[
            (Rook, White, 4, 4),
            (Pawn, Black, 2, 4),
            (Pawn, White, 6, 4),
            (Knight, Black, 4, 1),
            (Bishop, White, 4, 6),
        ]);
        let expected = sorted(vec![
            sq(3, 4),
            sq(2, 4),
            sq(5, 4),
            sq(4, 3),
            sq(4, 2),
            sq(4, 1),
            sq(4, 5),
        ]);
        assert_eq!(moves_from(&board, &pieces, 4, 4), expected);
    }

    #[test]
    fn bishop_rays() {
        let (board, pieces) = position(&[(Bishop, Black, 0, 2), (Pawn, White, 2, 4), (Pawn, Black, 1, 1)]);
        assert_eq!(moves_from(&board, &pieces, 0, 2), sorted(vec![sq(1, 3), sq(2, 4)]));
    }

    #[test]
    fn bishop_on_empty_board_corner() {
        let (board, pieces) = position(&[(Bishop, White, 7, 0)]);
        let moves = moves_from(&board, &pieces, 7, 0);
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(&sq(0, 7)));
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let (board, pieces) = position(&[(Queen, White, 4, 3)]);
        assert_eq!(moves_from(&board, &pieces, 4, 3).len(), 27);
    }

    #[test]
    fn blocked_in_start_position_slider() {
        let (board, pieces) = position(&[
            (Rook, White, 7, 0),
            (Knight, White, 7, 1),
            (Pawn, White, 6, 0),
        ]);
        assert!(moves_from(&board, &pieces, 7, 0).is_empty());
    }
}

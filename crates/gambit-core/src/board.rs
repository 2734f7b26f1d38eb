//! The chess board: 64 squares, each optionally referencing a piece by id.

use std::fmt;

use crate::color::Color;
use crate::error::{BoardError, GameError};
use crate::piece::{Piece, PieceId, PieceSet};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// An 8x8 occupancy grid.
///
/// The board does not own pieces; it stores [`PieceId`]s into a [`PieceSet`]
/// owned by the game. Keeping a slot consistent with the referenced piece's
/// position is the caller's job; [`Board::validate`] checks it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [Option<PieceId>; Square::COUNT],
}

impl Board {
    /// Return a board with every square empty.
    pub const fn empty() -> Board {
        Board {
            slots: [None; Square::COUNT],
        }
    }

    /// Return the occupant of `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either coordinate is outside `0..8`.
    pub fn get(&self, row: i8, col: i8) -> Result<Option<PieceId>, GameError> {
        Square::new(row, col).map(|sq| self.occupant(sq))
    }

    /// Overwrite the occupant of `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either coordinate is outside `0..8`.
    pub fn set(&mut self, row: i8, col: i8, occupant: Option<PieceId>) -> Result<(), GameError> {
        let sq = Square::new(row, col)?;
        self.slots[sq.index()] = occupant;
        Ok(())
    }

    /// Return the occupant of an already-validated square.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<PieceId> {
        self.slots[sq.index()]
    }

    /// Return `true` if the square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.slots[sq.index()].is_some()
    }

    /// Put `id` on `sq`, replacing any previous reference.
    #[inline]
    pub fn place(&mut self, sq: Square, id: PieceId) {
        self.slots[sq.index()] = Some(id);
    }

    /// Empty `sq`, returning whatever it referenced.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<PieceId> {
        self.slots[sq.index()].take()
    }

    /// Return the color of the piece on `sq`, if any.
    pub fn color_on(&self, pieces: &PieceSet, sq: Square) -> Option<Color> {
        self.occupant(sq)
            .and_then(|id| pieces.live(id))
            .map(Piece::color)
    }

    /// Return the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate over `(square, occupant)` for every occupied square.
    pub fn iter(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(|sq| self.occupant(sq).map(|id| (sq, id)))
    }

    /// Check that the board and `pieces` describe the same position.
    ///
    /// Every occupant must be a live piece standing on that square, every
    /// live piece must be referenced by its square, and each side must have
    /// exactly one live king.
    pub fn validate(&self, pieces: &PieceSet) -> Result<(), BoardError> {
        for (square, id) in self.iter() {
            let piece = pieces
                .live(id)
                .ok_or(BoardError::DanglingOccupant { square })?;
            if piece.square() != Some(square) {
                return Err(BoardError::MisplacedPiece { square });
            }
        }

        for piece in pieces.iter_live() {
            let referenced = piece
                .square()
                .is_some_and(|sq| self.occupant(sq) == Some(piece.id()));
            if !referenced {
                return Err(BoardError::MissingPiece { piece: piece.id() });
            }
        }

        for color in Color::ALL {
            let count = pieces
                .iter_live()
                .filter(|p| p.color() == color && p.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty<'a>(&'a self, pieces: &'a PieceSet) -> PrettyBoard<'a> {
        PrettyBoard { board: self, pieces }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({} occupied)", self.occupied_count())
    }
}

/// Wrapper for printing a board as an 8x8 grid, row 0 first.
///
/// White pieces are uppercase, Black lowercase, empty squares `.`.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    pieces: &'a PieceSet,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let sq = Square::from_coords_unchecked(row, col);
                let c = match self.board.occupant(sq).and_then(|id| self.pieces.live(id)) {
                    Some(p) if p.color() == Color::White => p.kind().letter().to_ascii_uppercase(),
                    Some(p) => p.kind().letter(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

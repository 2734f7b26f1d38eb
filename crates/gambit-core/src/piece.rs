//! Pieces and the piece table that owns them.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Index of a piece in its [`PieceSet`].
///
/// Ids are assigned at creation and never reused, so a captured piece keeps
/// its id for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u8);

impl PieceId {
    /// Wrap a raw table index.
    #[inline]
    pub const fn new(index: u8) -> PieceId {
        PieceId(index)
    }

    /// Return the table index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single piece: fixed identity plus mutable position, status and cached
/// destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    square: Square,
    alive: bool,
    moves: Vec<Square>,
}

impl Piece {
    /// Return this piece's id.
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Return the piece kind.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Return the square the piece stands on, or `None` once captured.
    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.alive.then_some(self.square)
    }

    /// Return `false` once the piece has been captured.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Return the cached pseudo-legal destinations from the last recompute.
    #[inline]
    pub fn moves(&self) -> &[Square] {
        &self.moves
    }

    pub(crate) fn set_moves(&mut self, moves: Vec<Square>) {
        self.moves = moves;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.color, self.kind, self.id)
    }
}

/// Owning table of every piece created for a game, live or captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    /// Create an empty table.
    pub fn new() -> PieceSet {
        PieceSet { pieces: Vec::with_capacity(32) }
    }

    /// Add a live piece standing on `square` and return its id.
    pub fn spawn(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece {
            id,
            kind,
            color,
            square,
            alive: true,
            moves: Vec::new(),
        });
        id
    }

    /// Look up a piece, live or captured.
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Look up a piece only if it is still on the board.
    #[inline]
    pub fn live(&self, id: PieceId) -> Option<&Piece> {
        self.get(id).filter(|p| p.alive)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    /// Move a piece to `square`. Board occupancy is the caller's concern.
    pub fn relocate(&mut self, id: PieceId, square: Square) {
        if let Some(piece) = self.get_mut(id) {
            piece.square = square;
        }
    }

    /// Mark a piece captured and drop its cached destinations.
    pub fn capture(&mut self, id: PieceId) {
        if let Some(piece) = self.get_mut(id) {
            piece.alive = false;
            piece.moves.clear();
        }
    }

    /// Bring a captured piece back on `square`.
    pub fn revive(&mut self, id: PieceId, square: Square) {
        if let Some(piece) = self.get_mut(id) {
            piece.alive = true;
            piece.square = square;
        }
    }

    /// Iterate over every piece, captured ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Iterate over pieces still on the board.
    pub fn iter_live(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.alive)
    }

    /// Return the live king of `color`, if any.
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.iter_live()
            .find(|p| p.kind == PieceKind::King && p.color == color)
    }

    /// Total number of pieces ever created.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Return `true` if no piece was ever created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

//! Core chess types: board, pieces, squares and pseudo-legal move generation.

mod board;
mod color;
mod error;
pub mod movegen;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, GameError, IllegalMoveReason};
pub use piece::{Piece, PieceId, PieceSet};
pub use piece_kind::PieceKind;
pub use square::Square;

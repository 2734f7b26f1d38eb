//! Game state: board, piece table, turn order, history and status.

use std::fmt;

use tracing::{debug, info};

use gambit_core::movegen;
use gambit_core::{
    Board, BoardError, Color, GameError, IllegalMoveReason, Piece, PieceId, PieceKind, PieceSet,
    PrettyBoard, Square,
};

use crate::check;

/// Back row layout from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Outcome classification of a position, from the side to move's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move is not in check and has a legal move.
    InProgress,
    /// The given side is to move, in check, and has a legal move.
    Check(Color),
    /// The given side is to move, in check, and has no legal move.
    Checkmate(Color),
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(c) => write!(f, "{c} in check"),
            GameStatus::Checkmate(c) => write!(f, "{c} checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// One applied move, enough to undo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: PieceId,
    /// Where it came from.
    pub from: Square,
    /// Where it went.
    pub to: Square,
    /// The piece removed from `to`, if the move was a capture.
    pub captured: Option<PieceId>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Knobs for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Re-validate board and piece table after every applied or undone move.
    pub consistency_checks: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            consistency_checks: cfg!(debug_assertions),
        }
    }
}

/// A chess game in progress.
///
/// Owns the board and every piece. After each applied or undone move the
/// cached destinations of all live pieces are recomputed from scratch and
/// the status is re-evaluated. Cloning is a plain structural copy.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    pieces: PieceSet,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    status: GameStatus,
    options: GameOptions,
}

impl GameState {
    /// Set up the standard starting position with White to move.
    pub fn new() -> GameState {
        let mut board = Board::empty();
        let mut pieces = PieceSet::new();
        for color in Color::ALL {
            for (col, officer) in BACK_ROW.into_iter().enumerate() {
                for (row, kind) in [(color.back_row(), officer), (color.pawn_row(), PieceKind::Pawn)] {
                    if let Some(sq) = Square::checked(row as i8, col as i8) {
                        let id = pieces.spawn(kind, color, sq);
                        board.place(sq, id);
                    }
                }
            }
        }
        GameState::from_parts(board, pieces, Color::White)
    }

    /// Build a state from an already consistent board and piece table.
    pub(crate) fn from_parts(board: Board, pieces: PieceSet, side_to_move: Color) -> GameState {
        let mut state = GameState {
            board,
            pieces,
            side_to_move,
            history: Vec::new(),
            status: GameStatus::InProgress,
            options: GameOptions::default(),
        };
        state.refresh();
        state
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the piece table, captured pieces included.
    #[inline]
    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    /// Look up a piece by id, live or captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// Return the live piece standing on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.occupant(sq).and_then(|id| self.pieces.live(id))
    }

    /// Return the side to move.
    #[inline]
    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    /// Return the status evaluated after the last change.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return every applied move, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Return the current options.
    #[inline]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    /// Return the square of `color`'s king, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces.king(color).and_then(Piece::square)
    }

    /// Return `(color, kind)` for every square, indexed `[row][col]`.
    pub fn grid(&self) -> [[Option<(Color, PieceKind)>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (sq, id) in self.board.iter() {
            if let Some(piece) = self.pieces.live(id) {
                grid[sq.row() as usize][sq.col() as usize] = Some((piece.color(), piece.kind()));
            }
        }
        grid
    }

    /// Return a printable 8x8 rendering of the board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        self.board.pretty(&self.pieces)
    }

    /// Return the destinations of `id` that do not leave its own king
    /// attacked. Turn order is not considered.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPieceReference`] for an unknown or
    /// captured piece.
    pub fn legal_destinations_for(&self, id: PieceId) -> Result<Vec<Square>, GameError> {
        if self.pieces.live(id).is_none() {
            return Err(GameError::InvalidPieceReference { piece: id });
        }
        Ok(check::legal_destinations(self, id))
    }

    /// Return every legal `(piece, destination)` pair for the side to move.
    pub fn legal_moves(&self) -> Vec<(PieceId, Square)> {
        check::legal_moves(self, self.side_to_move)
    }

    /// Move `id` to `to` for the side to move.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPieceReference`] if `id` is unknown or captured.
    /// - [`GameError::IllegalMove`] if the game is over, the piece belongs to
    ///   the other side, `to` is not a pseudo-legal destination, or the move
    ///   would leave the mover's king attacked.
    /// - [`GameError::Inconsistent`] if consistency checks are enabled and
    ///   fail afterwards.
    pub fn apply_move(&mut self, id: PieceId, to: Square) -> Result<MoveRecord, GameError> {
        let piece = self
            .pieces
            .live(id)
            .ok_or(GameError::InvalidPieceReference { piece: id })?;

        let illegal = |reason| GameError::IllegalMove { piece: id, to, reason };
        if self.status.is_over() {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        if piece.color() != self.side_to_move {
            return Err(illegal(IllegalMoveReason::NotYourTurn));
        }
        if !piece.moves().contains(&to) {
            return Err(illegal(IllegalMoveReason::Unreachable));
        }
        if !check::keeps_king_safe(self, id, to) {
            return Err(illegal(IllegalMoveReason::LeavesKingInCheck));
        }

        let record = self.advance(id, to);
        self.verify()?;
        Ok(record)
    }

    /// Take back the last applied move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NothingToUndo`] when no move has been applied,
    /// or [`GameError::Inconsistent`] if consistency checks fail afterwards.
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        let record = self.history.pop().ok_or(GameError::NothingToUndo)?;

        self.board.clear(record.to);
        self.board.place(record.from, record.piece);
        self.pieces.relocate(record.piece, record.from);
        if let Some(captured) = record.captured {
            self.pieces.revive(captured, record.to);
            self.board.place(record.to, captured);
        }
        self.side_to_move = self.side_to_move.flip();
        self.refresh();

        debug!(piece = %record.piece, from = %record.from, to = %record.to, "move undone");
        self.verify()?;
        Ok(record)
    }

    /// Check that the board and piece table agree.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.board.validate(&self.pieces)
    }

    /// Apply a move already known to be legal, then recompute and re-evaluate.
    pub(crate) fn advance(&mut self, id: PieceId, to: Square) -> MoveRecord {
        let mover = self.side_to_move;
        let (from, captured) = relocate(&mut self.board, &mut self.pieces, id, to);
        let record = MoveRecord { piece: id, from, to, captured };
        self.history.push(record);
        self.side_to_move = mover.flip();
        self.refresh();

        debug!(
            %mover,
            piece = %id,
            %from,
            %to,
            captured = ?captured,
            "move applied"
        );
        match self.status {
            GameStatus::InProgress => {}
            GameStatus::Check(c) => info!(player = %c, "check"),
            GameStatus::Checkmate(c) => info!(player = %c, "checkmate"),
            GameStatus::Stalemate => info!("stalemate"),
        }
        record
    }

    /// Recompute every cache and the status.
    fn refresh(&mut self) {
        movegen::recompute(&self.board, &mut self.pieces, None);
        self.status = check::evaluate(self);
    }

    fn verify(&self) -> Result<(), GameError> {
        if self.options.consistency_checks {
            self.validate()?;
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Move `id` to `to` on `board`, capturing whatever stands there.
///
/// Returns the origin square and the captured piece. Caches are left stale.
pub(crate) fn relocate(
    board: &mut Board,
    pieces: &mut PieceSet,
    id: PieceId,
    to: Square,
) -> (Square, Option<PieceId>) {
    let from = pieces.get(id).and_then(Piece::square).unwrap_or(to);
    let captured = board.clear(to).filter(|&c| c != id);
    if let Some(victim) = captured {
        pieces.capture(victim);
    }
    board.clear(from);
    board.place(to, id);
    pieces.relocate(id, to);
    (from, captured)
}

//! Game rules for gambit: turn order, king safety, status and persistence.

pub mod check;
pub mod error;
pub mod game;
pub mod perft;
pub mod snapshot;

pub use error::SnapshotError;
pub use game::{GameOptions, GameState, GameStatus, MoveRecord};
pub use snapshot::{PieceRecord, Snapshot};

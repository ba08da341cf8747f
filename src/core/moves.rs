//! Move representation.
//!
//! A move either places a piece or skips the turn. There are no other
//! kinds; engine code dispatches on the variant with `match`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::pieces::Piece;

/// A complete game move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a piece on the board.
    Set(Piece),
    /// Pass the turn without placing anything.
    Skip,
}

impl Move {
    /// The placed piece, for `Move::Set`.
    #[must_use]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Move::Set(piece) => Some(piece),
            Move::Skip => None,
        }
    }

    /// The placing color, for `Move::Set`.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.piece().map(Piece::color)
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Move::Skip)
    }
}

impl From<Piece> for Move {
    fn from(piece: Piece) -> Self {
        Move::Set(piece)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Set(piece) => write!(f, "SetMove({})", piece),
            Move::Skip => f.write_str("SkipMove"),
        }
    }
}

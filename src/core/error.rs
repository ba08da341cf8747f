//! Engine errors and move rule violations.

use derive_more::{Display, Error};

use super::color::Color;
use super::coordinates::Coordinates;
use super::moves::Move;
use crate::pieces::PieceShape;

/// The rule a rejected move breaks.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Violation {
    /// Every color has been eliminated.
    #[display("no color is left to move")]
    NoActiveColor,

    /// The opening move must place a piece.
    #[display("skipping is not allowed on the first move")]
    SkipOnFirstMove,

    #[display("it is {expected}'s turn, not {actual}'s")]
    WrongColor { expected: Color, actual: Color },

    #[display("the first piece must be {expected}, not {actual}")]
    NotStartPiece { expected: PieceShape, actual: PieceShape },

    #[display("the first piece must cover a board corner")]
    NotOnCorner,

    #[display("{shape} has already been placed")]
    AlreadyDeployed { shape: PieceShape },

    /// No cell touches the mover's own color at a corner.
    #[display("the piece does not touch its own color diagonally")]
    NotConnected,

    #[display("cell {at} is outside the board")]
    OutOfBounds { at: Coordinates },

    #[display("cell {at} is already occupied")]
    Obstructed { at: Coordinates },

    /// A cell shares an edge with the mover's own color.
    #[display("cell {at} shares an edge with its own color")]
    BordersOwnColor { at: Coordinates },
}

/// Errors reported by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// `perform_move` was handed a move that fails validation. The state is
    /// left untouched.
    #[display("invalid move {mv}: {violation}")]
    InvalidMove {
        #[error(not(source))]
        mv: Move,
        #[error(not(source))]
        violation: Violation,
    },

    #[display("unknown piece shape {name:?}")]
    UnknownShape {
        #[error(not(source))]
        name: String,
    },

    #[display("invalid configuration: {reason}")]
    InvalidConfig {
        #[error(not(source))]
        reason: String,
    },

    /// A serialized board whose cells do not form a square grid.
    #[display("invalid board: {reason}")]
    InvalidBoard {
        #[error(not(source))]
        reason: String,
    },
}

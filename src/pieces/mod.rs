//! Piece geometry: shapes, orientations and placed pieces, plus the
//! point value of an inventory.

pub mod orientation;
pub mod piece;
pub mod scoring;
pub mod shape;

use smallvec::SmallVec;

use crate::core::Coordinates;

/// A sorted set of cells. Five inline slots cover every catalog shape.
pub type CellSet = SmallVec<[Coordinates; 5]>;

pub use orientation::{Orientation, Rotation};
pub use piece::Piece;
pub use scoring::{score_with_total, ALL_PLACED_BONUS, MONO_LAST_BONUS};
pub use shape::{total_cells, PieceShape};

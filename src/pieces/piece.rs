//! A shape placed on the board: color, shape, orientation and anchor.
//!
//! The absolute cells are derived eagerly and stored sorted, so two pieces
//! compare equal whenever they have the same color and cover the same
//! cells, regardless of which orientation produced them.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::orientation::{Orientation, Rotation};
use super::shape::PieceShape;
use super::CellSet;
use crate::core::{Color, Coordinates};

/// A placed or candidate piece.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "PieceSpec", into = "PieceSpec")]
pub struct Piece {
    color: Color,
    shape: PieceShape,
    orientation: Orientation,
    anchor: Coordinates,
    cells: CellSet,
}

impl Piece {
    /// Create a piece. `anchor` is the upper-left corner of the oriented
    /// shape's bounding box.
    #[must_use]
    pub fn new(color: Color, shape: PieceShape, orientation: Orientation, anchor: Coordinates) -> Self {
        let mut piece = Self {
            color,
            shape,
            orientation,
            anchor,
            cells: CellSet::new(),
        };
        piece.update_cells();
        piece
    }

    /// A piece in its canonical orientation at the origin.
    #[must_use]
    pub fn unplaced(color: Color, shape: PieceShape) -> Self {
        Self::new(color, shape, Orientation::IDENTITY, Coordinates::ORIGIN)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn shape(&self) -> PieceShape {
        self.shape
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn anchor(&self) -> Coordinates {
        self.anchor
    }

    /// Absolute board cells, sorted.
    #[must_use]
    pub fn cells(&self) -> &[Coordinates] {
        &self.cells
    }

    /// Width and height of the occupied bounding box.
    #[must_use]
    pub fn area(&self) -> Coordinates {
        let w = self.cells.iter().map(|c| c.x - self.anchor.x).max().unwrap_or(0) + 1;
        let h = self.cells.iter().map(|c| c.y - self.anchor.y).max().unwrap_or(0) + 1;
        Coordinates::new(w, h)
    }

    // === In-place transforms ===

    /// Add a rotation to the current one.
    pub fn rotate_mut(&mut self, rotation: Rotation) {
        self.orientation.rotation = self.orientation.rotation.rotate(rotation);
        self.update_cells();
    }

    /// Toggle the mirror when `flip` is true.
    pub fn flip_mut(&mut self, flip: bool) {
        self.orientation.flipped ^= flip;
        self.update_cells();
    }

    /// Move the anchor to `anchor`.
    pub fn locate_mut(&mut self, anchor: Coordinates) {
        self.anchor = anchor;
        self.update_cells();
    }

    /// Shift the anchor by `shift`.
    pub fn translate_mut(&mut self, shift: Coordinates) {
        self.anchor = self.anchor + shift;
        self.update_cells();
    }

    // === Value-returning transforms ===

    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut piece = self.clone();
        piece.rotate_mut(rotation);
        piece
    }

    #[must_use]
    pub fn flipped(&self, flip: bool) -> Self {
        let mut piece = self.clone();
        piece.flip_mut(flip);
        piece
    }

    #[must_use]
    pub fn located(&self, anchor: Coordinates) -> Self {
        let mut piece = self.clone();
        piece.locate_mut(anchor);
        piece
    }

    #[must_use]
    pub fn translated(&self, shift: Coordinates) -> Self {
        let mut piece = self.clone();
        piece.translate_mut(shift);
        piece
    }

    fn update_cells(&mut self) {
        let anchor = self.anchor;
        self.cells.clear();
        self.cells
            .extend(self.shape.transform(self.orientation).iter().map(|&c| c + anchor));
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.cells == other.cells
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.cells.hash(state);
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} at {} rotation {}",
            self.color, self.shape, self.anchor, self.orientation
        )
    }
}

/// Serialized form: cells are derived, not stored.
#[derive(Serialize, Deserialize)]
struct PieceSpec {
    color: Color,
    shape: PieceShape,
    rotation: Rotation,
    flipped: bool,
    anchor: Coordinates,
}

impl From<PieceSpec> for Piece {
    fn from(spec: PieceSpec) -> Self {
        Piece::new(
            spec.color,
            spec.shape,
            Orientation::new(spec.rotation, spec.flipped),
            spec.anchor,
        )
    }
}

impl From<Piece> for PieceSpec {
    fn from(piece: Piece) -> Self {
        Self {
            color: piece.color,
            shape: piece.shape,
            rotation: piece.orientation.rotation,
            flipped: piece.orientation.flipped,
            anchor: piece.anchor,
        }
    }
}

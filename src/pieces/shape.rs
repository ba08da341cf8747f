//! The fixed catalog of polyomino shapes.
//!
//! Each shape stores its canonical cells in a local frame aligned to the
//! origin. Oriented cell sets are computed once per process and cached;
//! `unique_transforms` exposes only orientations that produce distinct
//! cell sets, which keeps move generation from trying symmetric
//! duplicates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

use super::orientation::{normalize, Orientation};
use super::CellSet;
use crate::core::{Coordinates, RulesError};

macro_rules! cells {
    ($(($x:expr, $y:expr)),+ $(,)?) => {
        &[$(Coordinates { x: $x, y: $y }),+]
    };
}

/// A polyomino in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceShape {
    Mono,
    Domino,
    TrioL,
    TrioI,
    TetroO,
    TetroT,
    TetroI,
    TetroL,
    TetroZ,
    PentoL,
    PentoT,
    PentoV,
    PentoS,
    PentoZ,
    PentoI,
    PentoP,
    PentoW,
    PentoU,
    PentoR,
    PentoX,
    PentoY,
}

impl PieceShape {
    /// The full catalog in canonical order.
    pub const ALL: [PieceShape; 21] = [
        PieceShape::Mono,
        PieceShape::Domino,
        PieceShape::TrioL,
        PieceShape::TrioI,
        PieceShape::TetroO,
        PieceShape::TetroT,
        PieceShape::TetroI,
        PieceShape::TetroL,
        PieceShape::TetroZ,
        PieceShape::PentoL,
        PieceShape::PentoT,
        PieceShape::PentoV,
        PieceShape::PentoS,
        PieceShape::PentoZ,
        PieceShape::PentoI,
        PieceShape::PentoP,
        PieceShape::PentoW,
        PieceShape::PentoU,
        PieceShape::PentoR,
        PieceShape::PentoX,
        PieceShape::PentoY,
    ];

    /// Pentominoes that may be drawn as the start piece. The X pentomino is
    /// excluded since it cannot touch a board corner.
    pub const PENTOMINOES_FOR_START: [PieceShape; 11] = [
        PieceShape::PentoL,
        PieceShape::PentoT,
        PieceShape::PentoV,
        PieceShape::PentoS,
        PieceShape::PentoZ,
        PieceShape::PentoI,
        PieceShape::PentoP,
        PieceShape::PentoW,
        PieceShape::PentoU,
        PieceShape::PentoR,
        PieceShape::PentoY,
    ];

    /// Index in `PieceShape::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical cells in the local frame.
    #[must_use]
    pub const fn cells(self) -> &'static [Coordinates] {
        match self {
            PieceShape::Mono => cells![(0, 0)],
            PieceShape::Domino => cells![(0, 0), (1, 0)],
            PieceShape::TrioL => cells![(0, 0), (0, 1), (1, 1)],
            PieceShape::TrioI => cells![(0, 0), (0, 1), (0, 2)],
            PieceShape::TetroO => cells![(0, 0), (1, 0), (0, 1), (1, 1)],
            PieceShape::TetroT => cells![(0, 0), (1, 0), (2, 0), (1, 1)],
            PieceShape::TetroI => cells![(0, 0), (0, 1), (0, 2), (0, 3)],
            PieceShape::TetroL => cells![(0, 0), (0, 1), (0, 2), (1, 2)],
            PieceShape::TetroZ => cells![(0, 0), (1, 0), (1, 1), (2, 1)],
            PieceShape::PentoL => cells![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
            PieceShape::PentoT => cells![(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
            PieceShape::PentoV => cells![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
            PieceShape::PentoS => cells![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1)],
            PieceShape::PentoZ => cells![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
            PieceShape::PentoI => cells![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
            PieceShape::PentoP => cells![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
            PieceShape::PentoW => cells![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
            PieceShape::PentoU => cells![(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)],
            PieceShape::PentoR => cells![(0, 1), (1, 1), (1, 0), (2, 0), (1, 2)],
            PieceShape::PentoX => cells![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
            PieceShape::PentoY => cells![(0, 1), (1, 0), (1, 1), (1, 2), (1, 3)],
        }
    }

    /// Number of cells.
    #[must_use]
    pub const fn size(self) -> usize {
        self.cells().len()
    }

    /// Width and height of the canonical bounding box.
    #[must_use]
    pub fn dimension(self) -> Coordinates {
        let cells = self.cells();
        let w = cells.iter().map(|p| p.x).max().unwrap_or(0) + 1;
        let h = cells.iter().map(|p| p.y).max().unwrap_or(0) + 1;
        Coordinates::new(w, h)
    }

    /// The cells after applying `orientation`, aligned to the origin.
    #[must_use]
    pub fn transform(self, orientation: Orientation) -> &'static CellSet {
        &transform_table()[self.index()].by_orientation[orientation_index(orientation)]
    }

    /// Orientations producing pairwise distinct cell sets.
    ///
    /// The first orientation yielding each distinct cell set in
    /// `Orientation::ALL` order is kept. Calling this again restarts the
    /// sequence.
    pub fn unique_transforms(self) -> impl Iterator<Item = Orientation> + Clone {
        transform_table()[self.index()].unique.iter().map(|(o, _)| *o)
    }

    /// Unique orientations together with their cell sets.
    pub fn unique_variants(self) -> impl Iterator<Item = (Orientation, &'static CellSet)> + Clone {
        transform_table()[self.index()].unique.iter().map(|(o, cells)| (*o, cells))
    }

    /// The `index`-th unique variant, if there is one.
    #[must_use]
    pub fn unique_variant(self, index: usize) -> Option<(Orientation, &'static CellSet)> {
        transform_table()[self.index()].unique.get(index).map(|(o, cells)| (*o, cells))
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceShape::Mono => "MONO",
            PieceShape::Domino => "DOMINO",
            PieceShape::TrioL => "TRIO_L",
            PieceShape::TrioI => "TRIO_I",
            PieceShape::TetroO => "TETRO_O",
            PieceShape::TetroT => "TETRO_T",
            PieceShape::TetroI => "TETRO_I",
            PieceShape::TetroL => "TETRO_L",
            PieceShape::TetroZ => "TETRO_Z",
            PieceShape::PentoL => "PENTO_L",
            PieceShape::PentoT => "PENTO_T",
            PieceShape::PentoV => "PENTO_V",
            PieceShape::PentoS => "PENTO_S",
            PieceShape::PentoZ => "PENTO_Z",
            PieceShape::PentoI => "PENTO_I",
            PieceShape::PentoP => "PENTO_P",
            PieceShape::PentoW => "PENTO_W",
            PieceShape::PentoU => "PENTO_U",
            PieceShape::PentoR => "PENTO_R",
            PieceShape::PentoX => "PENTO_X",
            PieceShape::PentoY => "PENTO_Y",
        }
    }
}

impl std::fmt::Display for PieceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceShape {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RulesError::UnknownShape { name: s.to_string() })
    }
}

/// Total cell count of a set of shapes.
pub fn total_cells<'a>(shapes: impl IntoIterator<Item = &'a PieceShape>) -> usize {
    shapes.into_iter().map(|s| s.size()).sum()
}

struct ShapeTransforms {
    by_orientation: [CellSet; 8],
    unique: Vec<(Orientation, CellSet)>,
}

impl ShapeTransforms {
    fn compute(shape: PieceShape) -> Self {
        let canonical = normalize(shape.cells().iter().copied().collect());
        let by_orientation = Orientation::ALL.map(|o| o.apply(&canonical));

        let mut unique: Vec<(Orientation, CellSet)> = Vec::with_capacity(8);
        for (o, cells) in Orientation::ALL.iter().zip(by_orientation.iter()) {
            if !unique.iter().any(|(_, seen)| seen == cells) {
                unique.push((*o, cells.clone()));
            }
        }

        Self { by_orientation, unique }
    }
}

fn orientation_index(o: Orientation) -> usize {
    o.rotation.quarter_turns() as usize + if o.flipped { 4 } else { 0 }
}

fn transform_table() -> &'static [ShapeTransforms; 21] {
    static TABLE: OnceLock<[ShapeTransforms; 21]> = OnceLock::new();
    TABLE.get_or_init(|| PieceShape::ALL.map(ShapeTransforms::compute))
}

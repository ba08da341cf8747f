//! Rotations, reflections and their composition.
//!
//! An `Orientation` is one of the eight symmetries of the square: a
//! clockwise quarter-turn count followed by an optional mirror across the
//! vertical axis. Applying an orientation to a local cell set always
//! returns a set normalized so its smallest x and y are both zero.

use serde::{Deserialize, Serialize};

use super::CellSet;
use crate::core::Coordinates;

/// Clockwise rotation in quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    Right,
    Mirror,
    Left,
}

impl Rotation {
    /// All rotations, in quarter-turn order.
    pub const ALL: [Rotation; 4] = [Rotation::None, Rotation::Right, Rotation::Mirror, Rotation::Left];

    /// Number of clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        Self::ALL[(turns % 4) as usize]
    }

    /// Add another rotation on top of this one.
    #[must_use]
    pub const fn rotate(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    fn turn(self, c: Coordinates) -> Coordinates {
        match self {
            Rotation::None => c,
            Rotation::Right => Coordinates::new(-c.y, c.x),
            Rotation::Mirror => Coordinates::new(-c.x, -c.y),
            Rotation::Left => Coordinates::new(c.y, -c.x),
        }
    }
}

/// A rotation followed by an optional mirror.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: Rotation,
    pub flipped: bool,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation::new(Rotation::None, false);

    /// The eight orientations: unflipped rotations first.
    pub const ALL: [Orientation; 8] = [
        Orientation::new(Rotation::None, false),
        Orientation::new(Rotation::Right, false),
        Orientation::new(Rotation::Mirror, false),
        Orientation::new(Rotation::Left, false),
        Orientation::new(Rotation::None, true),
        Orientation::new(Rotation::Right, true),
        Orientation::new(Rotation::Mirror, true),
        Orientation::new(Rotation::Left, true),
    ];

    #[must_use]
    pub const fn new(rotation: Rotation, flipped: bool) -> Self {
        Self { rotation, flipped }
    }

    /// The orientation equivalent to applying `self` and then `next`.
    ///
    /// A mirror reverses the sense of every rotation applied after it,
    /// so `next`'s rotation is inverted when `self` is flipped.
    #[must_use]
    pub const fn then(self, next: Orientation) -> Self {
        let extra = if self.flipped {
            next.rotation.inverse()
        } else {
            next.rotation
        };
        Self {
            rotation: self.rotation.rotate(extra),
            flipped: self.flipped ^ next.flipped,
        }
    }

    /// Transform a single local cell, without normalization.
    #[must_use]
    pub fn map(self, c: Coordinates) -> Coordinates {
        let turned = self.rotation.turn(c);
        if self.flipped {
            Coordinates::new(-turned.x, turned.y)
        } else {
            turned
        }
    }

    /// Apply to a local cell set, returning a sorted set aligned to the origin.
    #[must_use]
    pub fn apply(self, cells: &[Coordinates]) -> CellSet {
        normalize(cells.iter().map(|&c| self.map(c)).collect())
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.rotation)?;
        if self.flipped {
            f.write_str(" (flipped)")?;
        }
        Ok(())
    }
}

/// Shift a cell set so that its minimum x and y are zero, then sort it.
pub(crate) fn normalize(mut cells: CellSet) -> CellSet {
    let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let shift = Coordinates::new(min_x, min_y);
    for c in cells.iter_mut() {
        *c = *c - shift;
    }
    cells.sort_unstable();
    cells
}

//! Integer board coordinates.
//!
//! `x` grows to the right, `y` grows downwards. The origin `(0, 0)` is the
//! upper-left corner of the board.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D integer vector, used both for absolute board positions and for
/// offsets inside a shape's local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub const ORIGIN: Coordinates = Coordinates { x: 0, y: 0 };

    /// Create new coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four edge-sharing neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinates> {
        NEIGHBOR_OFFSETS.into_iter().map(move |d| self + d)
    }

    /// The four corner-sharing neighbours.
    pub fn corners(self) -> impl Iterator<Item = Coordinates> {
        CORNER_OFFSETS.into_iter().map(move |d| self + d)
    }
}

impl Add for Coordinates {
    type Output = Coordinates;

    #[inline]
    fn add(self, rhs: Coordinates) -> Self::Output {
        Coordinates::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinates {
    type Output = Coordinates;

    #[inline]
    fn sub(self, rhs: Coordinates) -> Self::Output {
        Coordinates::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offsets of the orthogonal neighbours.
pub const NEIGHBOR_OFFSETS: [Coordinates; 4] = [
    Coordinates { x: 1, y: 0 },
    Coordinates { x: 0, y: 1 },
    Coordinates { x: -1, y: 0 },
    Coordinates { x: 0, y: -1 },
];

/// Offsets of the diagonal neighbours.
pub const CORNER_OFFSETS: [Coordinates; 4] = [
    Coordinates { x: 1, y: 1 },
    Coordinates { x: 1, y: -1 },
    Coordinates { x: -1, y: -1 },
    Coordinates { x: -1, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Coordinates::new(3, 4);
        let b = Coordinates::new(-1, 2);

        assert_eq!(a + b, Coordinates::new(2, 6));
        assert_eq!(a - b, Coordinates::new(4, 2));
        assert_eq!(a + Coordinates::ORIGIN, a);
    }

    #[test]
    fn test_neighbors_and_corners_are_disjoint() {
        let c = Coordinates::new(5, 5);
        let neighbors: Vec<_> = c.neighbors().collect();
        let corners: Vec<_> = c.corners().collect();

        assert_eq!(neighbors.len(), 4);
        assert_eq!(corners.len(), 4);
        assert!(neighbors.iter().all(|n| !corners.contains(n)));
        assert!(neighbors.contains(&Coordinates::new(5, 4)));
        assert!(corners.contains(&Coordinates::new(4, 6)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coordinates::new(1, -2)), "(1, -2)");
    }
}

//! The square playing field.
//!
//! Cells are stored row-major in a flat `Vec`. Reads outside the grid
//! return `None`; writes outside the grid are programmer errors and panic.
//! Deserialized boards are checked to be square before use.

use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::core::{Color, Coordinates, RulesError, MAX_BOARD_SIZE};

/// An N×N grid of cells, each empty or owned by a color.
///
/// `Clone` copies the whole grid; a clone never shares storage with its
/// source. Equality compares cell contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardCells")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty board of `size` × `size` cells.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        assert!(size <= MAX_BOARD_SIZE, "Board size {size} exceeds {MAX_BOARD_SIZE}");

        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Create a board and place the given fields on it.
    #[must_use]
    pub fn with_fields(size: usize, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut board = Self::new(size);
        for field in fields {
            board.add_field(field);
        }
        board
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coordinates` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, coordinates: Coordinates) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coordinates.x) && (0..n).contains(&coordinates.y)
    }

    /// The four corner cells.
    #[must_use]
    pub fn corners(&self) -> [Coordinates; 4] {
        let last = self.size as i32 - 1;
        [
            Coordinates::new(0, 0),
            Coordinates::new(last, 0),
            Coordinates::new(0, last),
            Coordinates::new(last, last),
        ]
    }

    /// Whether `coordinates` is one of the four corner cells.
    #[must_use]
    pub fn is_corner(&self, coordinates: Coordinates) -> bool {
        self.corners().contains(&coordinates)
    }

    /// The field at (x, y), or `None` when outside the board.
    #[must_use]
    pub fn field(&self, x: i32, y: i32) -> Option<Field> {
        self.field_at(Coordinates::new(x, y))
    }

    /// The field at `coordinates`, or `None` when outside the board.
    #[must_use]
    pub fn field_at(&self, coordinates: Coordinates) -> Option<Field> {
        self.index(coordinates).map(|i| Field {
            coordinates,
            content: self.cells[i],
        })
    }

    /// Owner of the cell at `coordinates`. `None` for empty or
    /// out-of-bounds cells.
    #[must_use]
    pub fn color_at(&self, coordinates: Coordinates) -> Option<Color> {
        self.index(coordinates).and_then(|i| self.cells[i])
    }

    /// Whether the cell holds a piece. Out-of-bounds cells are not obstructed.
    #[must_use]
    pub fn is_obstructed(&self, coordinates: Coordinates) -> bool {
        self.color_at(coordinates).is_some()
    }

    /// Replace the field at the field's coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn add_field(&mut self, field: Field) {
        let i = self
            .index(field.coordinates)
            .unwrap_or_else(|| panic!("Field {} is outside the board", field.coordinates));
        self.cells[i] = field.content;
    }

    /// Mark the cell at `coordinates` as owned by `color`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn set_color(&mut self, coordinates: Coordinates, color: Color) {
        self.add_field(Field::owned(coordinates, color));
    }

    /// All fields in row-major order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        let n = self.size;
        self.cells.iter().enumerate().map(move |(i, &content)| Field {
            coordinates: Coordinates::new((i % n) as i32, (i / n) as i32),
            content,
        })
    }

    /// Fields owned by `color`, lazily.
    pub fn fields_of_color(&self, color: Color) -> impl Iterator<Item = Field> + '_ {
        self.fields().filter(move |f| f.content == Some(color))
    }

    /// Whether any orthogonal neighbour of `coordinates` is owned by `color`.
    #[must_use]
    pub fn borders_on_color(&self, coordinates: Coordinates, color: Color) -> bool {
        coordinates.neighbors().any(|n| self.color_at(n) == Some(color))
    }

    /// Whether any diagonal neighbour of `coordinates` is owned by `color`.
    #[must_use]
    pub fn corners_on_color(&self, coordinates: Coordinates, color: Color) -> bool {
        coordinates.corners().any(|n| self.color_at(n) == Some(color))
    }

    fn index(&self, coordinates: Coordinates) -> Option<usize> {
        self.in_bounds(coordinates)
            .then(|| coordinates.y as usize * self.size + coordinates.x as usize)
    }
}

/// Unchecked wire form of a board.
#[derive(Deserialize)]
struct BoardCells {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl TryFrom<BoardCells> for Board {
    type Error = RulesError;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        let invalid = |reason: String| Err(RulesError::InvalidBoard { reason });

        if raw.size == 0 || raw.size > MAX_BOARD_SIZE {
            return invalid(format!("size {} is outside 1..={MAX_BOARD_SIZE}", raw.size));
        }
        if raw.cells.len() != raw.size * raw.size {
            return invalid(format!(
                "{} cells do not fill a {}x{} grid",
                raw.cells.len(),
                raw.size,
                raw.size
            ));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, field) in self.fields().enumerate() {
            if i > 0 && i % self.size == 0 {
                writeln!(f)?;
            } else if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

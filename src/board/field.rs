//! A single board cell.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Coordinates};

/// A board cell and its owner, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub coordinates: Coordinates,
    pub content: Option<Color>,
}

impl Field {
    /// Create an empty field.
    #[must_use]
    pub const fn empty(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            content: None,
        }
    }

    /// Create a field owned by `color`.
    #[must_use]
    pub const fn owned(coordinates: Coordinates, color: Color) -> Self {
        Self {
            coordinates,
            content: Some(color),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.content {
            Some(color) => write!(f, "{}", color.initial()),
            None => f.write_str("."),
        }
    }
}

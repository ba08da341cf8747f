//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The four piece colors, in turn order. A color is a turn slot: it can be
//! eliminated from the active queue without ceasing to exist.
//!
//! ## ColorMap
//!
//! Per-color data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A piece color. Declaration order is the default turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Red, Color::Green];

    /// Number of colors.
    pub const COUNT: usize = Self::ALL.len();

    /// Get the 0-based index in turn order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter tag used in board dumps.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
            Color::Red => "RED",
            Color::Green => "GREEN",
        };
        f.write_str(name)
    }
}

/// Per-color data storage with O(1) access.
///
/// Holds one entry for every color, including colors that do not take
/// part in the current game; callers decide which entries matter.
///
/// ## Example
///
/// ```
/// use blokus_rules::core::{Color, ColorMap};
///
/// let mut placed: ColorMap<u32> = ColorMap::with_value(0);
/// placed[Color::Red] += 5;
///
/// assert_eq!(placed[Color::Red], 5);
/// assert_eq!(placed[Color::Blue], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; Color::COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

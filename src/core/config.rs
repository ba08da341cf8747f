//! Game configuration.
//!
//! Everything the rules treat as a constant is configured here instead:
//! board size, participating colors and their turn order, the shape
//! catalog, the start piece and how the opening rule applies.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::RulesError;
use crate::pieces::{total_cells, PieceShape};

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 20;

/// Largest side length a board may have.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Which moves count as opening moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstMoveScope {
    /// Only the very first move of the game, whichever color makes it.
    #[default]
    Game,
    /// The first placement of every color.
    Color,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Participating colors in turn order.
    pub colors: Vec<Color>,

    /// Shapes every color starts with.
    pub catalog: Vec<PieceShape>,

    /// Shape that must be used for opening moves.
    pub start_piece: PieceShape,

    /// Which moves are opening moves.
    pub first_move_scope: FirstMoveScope,

    /// Ends the game once `round` reaches this value.
    pub round_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            colors: Color::ALL.to_vec(),
            catalog: PieceShape::ALL.to_vec(),
            start_piece: PieceShape::PentoL,
            first_move_scope: FirstMoveScope::default(),
            round_limit: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<Vec<PieceShape>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    #[must_use]
    pub fn with_start_piece(mut self, shape: PieceShape) -> Self {
        self.start_piece = shape;
        self
    }

    #[must_use]
    pub fn with_first_move_scope(mut self, scope: FirstMoveScope) -> Self {
        self.first_move_scope = scope;
        self
    }

    #[must_use]
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Sum of cell counts over the catalog.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        total_cells(&self.catalog)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), RulesError> {
        let invalid = |reason: String| Err(RulesError::InvalidConfig { reason });

        if self.board_size == 0 {
            return invalid("board size must be positive".into());
        }
        if self.board_size > MAX_BOARD_SIZE {
            return invalid(format!(
                "board size {} exceeds the maximum of {MAX_BOARD_SIZE}",
                self.board_size
            ));
        }
        if self.colors.is_empty() {
            return invalid("at least one color must take part".into());
        }
        for (i, color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(color) {
                return invalid(format!("{color} appears twice in the turn order"));
            }
        }
        if self.catalog.is_empty() {
            return invalid("the shape catalog is empty".into());
        }
        for (i, shape) in self.catalog.iter().enumerate() {
            if self.catalog[..i].contains(shape) {
                return invalid(format!("{shape} appears twice in the catalog"));
            }
        }
        if !self.catalog.contains(&self.start_piece) {
            return invalid(format!("start piece {} is not in the catalog", self.start_piece));
        }
        Ok(())
    }
}

//! # blokus-rules
//!
//! A rules engine for Blokus-style polyomino placement games.
//!
//! ## Design Principles
//!
//! 1. **Stateless Rules**: `GameRuleLogic` holds only its configuration.
//!    Every operation takes the `GameState` it reads or mutates.
//!
//! 2. **Configuration Over Constants**: board size, turn order, shape
//!    catalog and start piece live in `GameConfig`.
//!
//! 3. **Lazy Generation**: `possible_moves` yields validated moves one at a
//!    time, so a client with a time budget can stop early.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: inventories and the color queue use
//!   `im-rs`, so cloning a state for look-ahead is cheap.
//!
//! - **Cached Geometry**: every shape's oriented cell sets are computed
//!   once per process.
//!
//! ## Modules
//!
//! - `core`: Coordinates, colors, state, moves, RNG, configuration, errors
//! - `pieces`: Shapes, orientations and placed pieces
//! - `board`: The square grid of fields
//! - `rules`: RulesEngine trait and game results
//! - `games`: The Blokus rules
//! - `players`: Move-choosing clients

pub mod board;
pub mod core;
pub mod games;
pub mod pieces;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, Coordinates, FirstMoveScope, GameConfig, GameRng, GameState, Move,
    RulesError, Violation,
};

pub use crate::board::{Board, Field};

pub use crate::pieces::{Orientation, Piece, PieceShape, Rotation};

pub use crate::rules::{GameResult, RulesEngine, Standing};

pub use crate::games::blokus::{GameBuilder, GameRuleLogic};

pub use crate::players::RandomPlayer;

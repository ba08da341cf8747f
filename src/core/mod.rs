//! Core engine types: coordinates, colors, state, moves, RNG, configuration.
//!
//! Everything here is independent of a particular rules variant. Games
//! configure the core via `GameConfig` rather than modifying it.

pub mod color;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use color::{Color, ColorMap};
pub use config::{FirstMoveScope, GameConfig, BOARD_SIZE, MAX_BOARD_SIZE};
pub use coordinates::{Coordinates, CORNER_OFFSETS, NEIGHBOR_OFFSETS};
pub use error::{RulesError, Violation};
pub use moves::Move;
pub use rng::GameRng;
pub use state::GameState;

//! Blokus: polyomino placement on a square board.
//!
//! - Each color opens with the start piece covering a board corner
//! - Later pieces must touch their own color at a corner, never an edge
//! - A color with nothing to place may skip; a color that placed every
//!   shape leaves the turn order
//! - One point per placed cell, with a bonus for placing everything

mod game;
pub mod movegen;
pub mod validation;

pub use game::{GameBuilder, GameRuleLogic};
pub use movegen::SetMoves;
pub use crate::pieces::scoring::{ALL_PLACED_BONUS, MONO_LAST_BONUS};

//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state
//! - Termination and ranking
//!
//! Callers such as players only talk to `RulesEngine`, never to a
//! concrete game.

pub mod engine;

pub use engine::{GameResult, RulesEngine, Standing};

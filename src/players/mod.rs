//! Move-choosing clients built on `RulesEngine`.

pub mod random;

pub use random::RandomPlayer;

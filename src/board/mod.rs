//! Board model: cells and the N×N grid.

pub mod field;
pub mod grid;

pub use field::Field;
pub use grid::Board;

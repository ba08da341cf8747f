//! Point calculation from a color's undeployed inventory.

use super::PieceShape;

/// Bonus for placing every shape.
pub const ALL_PLACED_BONUS: i32 = 15;

/// Extra bonus when the monomino was the final placement.
pub const MONO_LAST_BONUS: i32 = 5;

/// Score a color against a catalog holding `total_cells` cells.
///
/// One point per placed cell. Placing everything is worth
/// `ALL_PLACED_BONUS` more, plus `MONO_LAST_BONUS` when `mono_last`.
pub fn score_with_total<'a>(
    total_cells: usize,
    undeployed: impl IntoIterator<Item = &'a PieceShape>,
    mono_last: bool,
) -> i32 {
    let remaining: usize = undeployed.into_iter().map(|s| s.size()).sum();
    let total = total_cells as i32;

    if remaining == 0 {
        total + ALL_PLACED_BONUS + if mono_last { MONO_LAST_BONUS } else { 0 }
    } else {
        total - remaining as i32
    }
}

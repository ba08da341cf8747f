//! Lazy enumeration of legal placements.
//!
//! ## Opening moves
//!
//! The start piece is anchored so that its bounding box sits against each
//! board corner, trying both bounding-box orientations and all eight
//! piece orientations. That candidate list is small and built up front.
//!
//! ## Later moves
//!
//! Only frontier cells can host a new piece: empty cells that touch the
//! color diagonally but not orthogonally. For every undeployed shape,
//! every unique orientation and every cell of that orientation, the piece
//! is anchored so the cell lands on a frontier cell. The scan is an index
//! cursor, so candidates are built one at a time and the caller may stop
//! whenever it likes.
//!
//! Every candidate is validated before it is yielded, and duplicates (the
//! same color on the same cells) are yielded once.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::validation::check_set_move;
use crate::core::{Color, Coordinates, GameState};
use crate::pieces::{Piece, PieceShape};

/// Frontier cells of `color`, sorted.
pub fn frontier(state: &GameState, color: Color) -> Vec<Coordinates> {
    let board = &state.board;
    let cells: FxHashSet<Coordinates> = board
        .fields_of_color(color)
        .flat_map(|field| field.coordinates.corners())
        .filter(|&c| board.in_bounds(c) && !board.is_obstructed(c) && !board.borders_on_color(c, color))
        .collect();

    let mut cells: Vec<Coordinates> = cells.into_iter().collect();
    cells.sort_unstable();
    cells
}

/// Iterator over the valid placements for the color to move.
pub struct SetMoves<'a> {
    state: &'a GameState,
    source: Source,
    seen: FxHashSet<Piece>,
}

enum Source {
    Empty,
    Start(std::vec::IntoIter<Piece>),
    Frontier(FrontierScan),
}

impl<'a> SetMoves<'a> {
    pub(crate) fn new(state: &'a GameState) -> Self {
        let source = match state.current_color() {
            None => Source::Empty,
            Some(color) if state.is_first_move() => Source::Start(start_candidates(state, color).into_iter()),
            Some(color) => Source::Frontier(FrontierScan::new(state, color)),
        };

        Self {
            state,
            source,
            seen: FxHashSet::default(),
        }
    }
}

impl Iterator for SetMoves<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        loop {
            let candidate = match &mut self.source {
                Source::Empty => return None,
                Source::Start(candidates) => candidates.next()?,
                Source::Frontier(scan) => scan.next_candidate()?,
            };

            if check_set_move(self.state, &candidate).is_ok() && self.seen.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
    }
}

/// Start piece placements with the bounding box against a board corner.
fn start_candidates(state: &GameState, color: Color) -> Vec<Piece> {
    let shape = state.start_piece();
    let n = state.board.size() as i32;
    let dim = shape.dimension();

    let mut anchors = vec![Coordinates::ORIGIN];
    for (w, h) in [(dim.x, dim.y), (dim.y, dim.x)] {
        anchors.push(Coordinates::new(n - w, 0));
        anchors.push(Coordinates::new(0, n - h));
        anchors.push(Coordinates::new(n - w, n - h));
    }

    let candidates: Vec<Piece> = anchors
        .into_iter()
        .flat_map(|anchor| shape.unique_transforms().map(move |o| Piece::new(color, shape, o, anchor)))
        .collect();

    trace!(%color, %shape, candidates = candidates.len(), "opening candidates");
    candidates
}

/// Cursor over (shape, variant, cell, target) tuples.
struct FrontierScan {
    color: Color,
    shapes: Vec<PieceShape>,
    targets: Vec<Coordinates>,
    shape: usize,
    variant: usize,
    cell: usize,
    target: usize,
}

impl FrontierScan {
    fn new(state: &GameState, color: Color) -> Self {
        let targets = frontier(state, color);
        let shapes: Vec<PieceShape> = if targets.is_empty() {
            Vec::new()
        } else {
            state.undeployed_pieces(color).collect()
        };

        trace!(%color, frontier = targets.len(), shapes = shapes.len(), "scanning frontier");

        Self {
            color,
            shapes,
            targets,
            shape: 0,
            variant: 0,
            cell: 0,
            target: 0,
        }
    }

    fn next_candidate(&mut self) -> Option<Piece> {
        loop {
            let shape = *self.shapes.get(self.shape)?;

            let Some((orientation, cells)) = shape.unique_variant(self.variant) else {
                self.shape += 1;
                self.variant = 0;
                continue;
            };

            let Some(&cell) = cells.get(self.cell) else {
                self.variant += 1;
                self.cell = 0;
                continue;
            };

            let Some(&target) = self.targets.get(self.target) else {
                self.cell += 1;
                self.target = 0;
                continue;
            };

            self.target += 1;
            return Some(Piece::new(self.color, shape, orientation, target - cell));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Move};
    use crate::pieces::Orientation;

    fn opened_state() -> GameState {
        let mut state = GameState::new(&GameConfig::default());
        let opening = Piece::new(Color::Blue, PieceShape::PentoL, Orientation::IDENTITY, Coordinates::ORIGIN);
        state.place_piece(&opening);
        state.finish_move(Move::Set(opening));
        for _ in 0..3 {
            state.finish_move(Move::Skip);
        }
        state
    }

    #[test]
    fn test_frontier_after_opening() {
        let state = opened_state();
        assert_eq!(
            frontier(&state, Color::Blue),
            vec![Coordinates::new(2, 2), Coordinates::new(2, 4)]
        );
        assert!(frontier(&state, Color::Red).is_empty());
    }

    #[test]
    fn test_opening_moves_touch_corners() {
        let state = GameState::new(&GameConfig::default());
        let moves: Vec<Piece> = SetMoves::new(&state).collect();

        assert!(!moves.is_empty());
        for piece in &moves {
            assert_eq!(piece.shape(), PieceShape::PentoL);
            assert_eq!(piece.color(), Color::Blue);
            assert!(piece.cells().iter().any(|&c| state.board.is_corner(c)));
        }
    }

    #[test]
    fn test_opening_moves_cover_every_corner() {
        let state = GameState::new(&GameConfig::default());
        let moves: Vec<Piece> = SetMoves::new(&state).collect();

        for corner in state.board.corners() {
            assert!(
                moves.iter().any(|p| p.cells().contains(&corner)),
                "no opening move covers {corner}"
            );
        }
    }

    #[test]
    fn test_moves_are_unique() {
        let state = opened_state();
        let moves: Vec<Piece> = SetMoves::new(&state).collect();
        let unique: FxHashSet<&Piece> = moves.iter().collect();
        assert_eq!(moves.len(), unique.len());
    }

    #[test]
    fn test_frontier_moves_cover_a_frontier_cell() {
        let state = opened_state();
        let targets = frontier(&state, Color::Blue);
        let moves: Vec<Piece> = SetMoves::new(&state).collect();

        assert!(moves.iter().any(|p| p.shape() == PieceShape::Mono));
        assert!(moves.iter().all(|p| p.shape() != PieceShape::PentoL));
        for piece in &moves {
            assert!(piece.cells().iter().any(|c| targets.contains(c)));
        }
    }

    #[test]
    fn test_no_moves_without_active_color() {
        let mut state = opened_state();
        while state.remove_current_color().is_some() {}
        assert_eq!(SetMoves::new(&state).count(), 0);
    }
}

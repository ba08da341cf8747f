//! Game state.
//!
//! ## GameState
//!
//! - Board contents
//! - Turn and round counters
//! - Active-color queue (head = color to move)
//! - Per-color inventory of undeployed shapes
//! - Opening-move bookkeeping and the last accepted move
//!
//! Inventories and the color queue use `im` persistent data structures so
//! that cloning a state for look-ahead is cheap.
//!
//! The state is mutated by the rules engine only; the queue and the
//! inventories have no public setters.

use im::{OrdSet, Vector};

use super::color::{Color, ColorMap};
use super::config::{FirstMoveScope, GameConfig};
use super::moves::Move;
use crate::board::Board;
use crate::pieces::{score_with_total, Piece, PieceShape};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Cell ownership.
    pub board: Board,

    /// Accepted moves so far.
    pub turn: u32,

    /// Incremented together with `turn`.
    pub round: u32,

    /// The most recent accepted move.
    pub last_move: Option<Move>,

    active_colors: Vector<Color>,
    undeployed: ColorMap<OrdSet<PieceShape>>,
    mono_last: ColorMap<bool>,
    first_move: bool,
    start_piece: PieceShape,
    first_move_scope: FirstMoveScope,
    catalog_len: usize,
    catalog_cells: usize,
}

impl GameState {
    /// Create the opening state for `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails `GameConfig::validate`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }

        let catalog: OrdSet<PieceShape> = config.catalog.iter().copied().collect();
        let participating = |c: Color| config.colors.contains(&c);

        Self {
            board: Board::new(config.board_size),
            turn: 0,
            round: 0,
            last_move: None,
            active_colors: config.colors.iter().copied().collect(),
            undeployed: ColorMap::new(|c| {
                if participating(c) {
                    catalog.clone()
                } else {
                    OrdSet::new()
                }
            }),
            mono_last: ColorMap::with_default(),
            first_move: true,
            start_piece: config.start_piece,
            first_move_scope: config.first_move_scope,
            catalog_len: config.catalog.len(),
            catalog_cells: config.total_cells(),
        }
    }

    // === Turn Order ===

    /// The color to move, or `None` once every color is eliminated.
    #[must_use]
    pub fn current_color(&self) -> Option<Color> {
        self.active_colors.front().copied()
    }

    /// Colors still taking turns, starting with the color to move.
    pub fn active_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.active_colors.iter().copied()
    }

    #[must_use]
    pub fn is_active(&self, color: Color) -> bool {
        self.active_colors.contains(&color)
    }

    /// Whether the next move is an opening move.
    ///
    /// With `FirstMoveScope::Game` this holds only before the first accepted
    /// move. With `FirstMoveScope::Color` it holds while the color to move
    /// still owns its whole inventory.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        match self.first_move_scope {
            FirstMoveScope::Game => self.first_move,
            FirstMoveScope::Color => self
                .current_color()
                .is_some_and(|c| self.undeployed[c].len() == self.catalog_len),
        }
    }

    /// Shape required for opening moves.
    #[must_use]
    pub fn start_piece(&self) -> PieceShape {
        self.start_piece
    }

    // === Inventories ===

    /// Shapes `color` has not placed yet, in catalog order.
    pub fn undeployed_pieces(&self, color: Color) -> impl Iterator<Item = PieceShape> + '_ {
        self.undeployed[color].iter().copied()
    }

    #[must_use]
    pub fn is_undeployed(&self, color: Color, shape: PieceShape) -> bool {
        self.undeployed[color].contains(&shape)
    }

    /// Whether the last piece `color` placed was the monomino.
    #[must_use]
    pub fn mono_last(&self, color: Color) -> bool {
        self.mono_last[color]
    }

    /// Current score of `color`.
    #[must_use]
    pub fn points_for(&self, color: Color) -> i32 {
        score_with_total(
            self.catalog_cells,
            self.undeployed[color].iter(),
            self.mono_last[color],
        )
    }

    // === Engine mutation ===

    /// Put a validated piece on the board and take it out of the inventory.
    pub(crate) fn place_piece(&mut self, piece: &Piece) {
        let color = piece.color();
        self.undeployed[color].remove(&piece.shape());
        for &cell in piece.cells() {
            self.board.set_color(cell, color);
        }
        self.mono_last[color] = piece.shape() == PieceShape::Mono;
    }

    /// Finish an accepted move: rotate or shrink the queue and bump counters.
    ///
    /// Returns the color that left the queue because its inventory is empty.
    pub(crate) fn finish_move(&mut self, mv: Move) -> Option<Color> {
        let mover = self.active_colors.pop_front();
        let exhausted = mover.filter(|&c| self.undeployed[c].is_empty());
        if let (Some(color), None) = (mover, exhausted) {
            self.active_colors.push_back(color);
        }

        self.turn += 1;
        self.round += 1;
        self.first_move = false;
        self.last_move = Some(mv);
        exhausted
    }

    /// Drop the color to move from the queue.
    pub(crate) fn remove_current_color(&mut self) -> Option<Color> {
        self.active_colors.pop_front()
    }
}

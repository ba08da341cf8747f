//! Blokus rules engine and builder.

use tracing::{debug, instrument};

use super::movegen::{self, SetMoves};
use super::validation;
use crate::core::{
    Color, Coordinates, FirstMoveScope, GameConfig, GameRng, GameState, Move, RulesError, Violation,
};
use crate::pieces::{score_with_total, PieceShape};
use crate::rules::{GameResult, RulesEngine};

/// The rules of the game.
///
/// Holds only the immutable configuration; every operation takes the
/// state it works on.
#[derive(Clone, Debug)]
pub struct GameRuleLogic {
    config: GameConfig,
}

/// Builder for a `GameRuleLogic` and its opening state.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    /// Participating colors, in turn order.
    pub fn colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.config.colors = colors.into();
        self
    }

    pub fn catalog(mut self, catalog: impl Into<Vec<PieceShape>>) -> Self {
        self.config.catalog = catalog.into();
        self
    }

    pub fn start_piece(mut self, shape: PieceShape) -> Self {
        self.config.start_piece = shape;
        self
    }

    /// Pick the start piece among the pentominoes other than PENTO_X.
    pub fn random_start_piece(mut self, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        if let Some(&shape) = rng.choose(&PieceShape::PENTOMINOES_FOR_START) {
            self.config.start_piece = shape;
        }
        self
    }

    pub fn first_move_scope(mut self, scope: FirstMoveScope) -> Self {
        self.config.first_move_scope = scope;
        self
    }

    /// End the game once `round` reaches `limit`.
    pub fn round_limit(mut self, limit: u32) -> Self {
        self.config.round_limit = Some(limit);
        self
    }

    /// Build the engine and the opening state.
    pub fn try_build(self) -> Result<(GameRuleLogic, GameState), RulesError> {
        self.config.validate()?;
        let state = GameState::new(&self.config);
        Ok((GameRuleLogic { config: self.config }, state))
    }

    /// Build the engine and the opening state.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn build(self) -> (GameRuleLogic, GameState) {
        match self.try_build() {
            Ok(built) => built,
            Err(err) => panic!("{err}"),
        }
    }
}

impl GameRuleLogic {
    /// Valid placements for the color to move, produced lazily.
    pub fn possible_setmoves<'a>(&'a self, state: &'a GameState) -> SetMoves<'a> {
        SetMoves::new(state)
    }

    /// Check a move, naming the first rule it breaks.
    pub fn check_move(&self, state: &GameState, mv: &Move) -> Result<(), Violation> {
        validation::check_move(state, mv)
    }

    /// Frontier cells of `color`, sorted.
    pub fn frontier(&self, state: &GameState, color: Color) -> Vec<Coordinates> {
        movegen::frontier(state, color)
    }

    /// Score an inventory against the configured catalog.
    pub fn score<'a>(&self, undeployed: impl IntoIterator<Item = &'a PieceShape>, mono_last: bool) -> i32 {
        score_with_total(self.config.total_cells(), undeployed, mono_last)
    }

    /// Drop colors from the head of the queue while they have no legal move.
    ///
    /// Returns the removed colors in removal order.
    pub fn remove_invalid_colors(&self, state: &mut GameState) -> Vec<Color> {
        let mut removed = Vec::new();
        while let Some(color) = state.current_color() {
            if self.possible_moves(state).next().is_some() {
                break;
            }
            debug!(%color, round = state.round, "color has no legal move, removing");
            state.remove_current_color();
            removed.push(color);
        }
        removed
    }

    fn standings(&self, state: &GameState) -> GameResult {
        GameResult::from_scores(self.config.colors.iter().map(|&c| (c, state.points_for(c))))
    }
}

impl RulesEngine for GameRuleLogic {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn possible_moves<'a>(&'a self, state: &'a GameState) -> Box<dyn Iterator<Item = Move> + 'a> {
        let skip = state.current_color().is_some() && !state.is_first_move();
        Box::new(
            self.possible_setmoves(state)
                .map(Move::Set)
                .chain(skip.then_some(Move::Skip)),
        )
    }

    fn is_valid_move(&self, state: &GameState, mv: &Move) -> bool {
        self.check_move(state, mv).is_ok()
    }

    #[instrument(skip(self, state), fields(turn = state.turn), level = "debug")]
    fn perform_move(&self, state: &mut GameState, mv: &Move) -> Result<(), RulesError> {
        if let Err(violation) = self.check_move(state, mv) {
            return Err(RulesError::InvalidMove {
                mv: mv.clone(),
                violation,
            });
        }

        if let Move::Set(piece) = mv {
            state.place_piece(piece);
        }

        if let Some(color) = state.finish_move(mv.clone()) {
            debug!(%color, points = state.points_for(color), "all pieces placed");
        }

        Ok(())
    }

    fn winning_condition(&self, state: &GameState) -> Option<GameResult> {
        let out_of_rounds = self.config.round_limit.is_some_and(|limit| state.round >= limit);
        if state.current_color().is_none() || out_of_rounds {
            Some(self.standings(state))
        } else {
            None
        }
    }
}

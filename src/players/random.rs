//! Uniform random move selection.

use std::time::Instant;

use tracing::trace;

use crate::core::{GameRng, GameState, Move};
use crate::rules::RulesEngine;

/// Picks a legal move uniformly at random.
///
/// Works with any `RulesEngine`. Seeded, so a game between random players
/// is reproducible.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Choose among all legal moves. `None` when there are none.
    pub fn choose_move<E: RulesEngine>(&mut self, engine: &E, state: &GameState) -> Option<Move> {
        let moves = engine.legal_moves(state);
        self.rng.choose(&moves).cloned()
    }

    /// Choose among the moves generated before `deadline`.
    ///
    /// Generation stops at the deadline and the pick is uniform over what
    /// was seen so far. At least one move is always examined, so a legal
    /// move is returned whenever one exists.
    pub fn choose_move_before<E: RulesEngine>(
        &mut self,
        engine: &E,
        state: &GameState,
        deadline: Instant,
    ) -> Option<Move> {
        let mut chosen = None;
        let mut seen = 0usize;

        for mv in engine.possible_moves(state) {
            seen += 1;
            // Reservoir sampling: keep the i-th move with probability 1/i.
            if self.rng.gen_range_usize(0..seen) == 0 {
                chosen = Some(mv);
            }
            if Instant::now() >= deadline {
                trace!(seen, "deadline reached during move generation");
                break;
            }
        }

        chosen
    }
}

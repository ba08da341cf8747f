//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify state
//! - When the game ends and who won

use crate::core::{Color, GameConfig, GameState, Move, RulesError};

/// One color's final placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    pub color: Color,
    pub score: i32,
    /// 1-based; tied colors share a rank and the next rank is skipped.
    pub rank: u8,
}

/// Result of a completed game.
///
/// Ties are reported, never broken: every color sharing the best score
/// is a winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    standings: Vec<Standing>,
}

impl GameResult {
    /// Rank colors by score, best first. Equal scores share a rank.
    pub fn from_scores(scores: impl IntoIterator<Item = (Color, i32)>) -> Self {
        let mut sorted: Vec<(Color, i32)> = scores.into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut standings: Vec<Standing> = Vec::with_capacity(sorted.len());
        for (i, (color, score)) in sorted.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(prev) if prev.score == score => prev.rank,
                _ => i as u8 + 1,
            };
            standings.push(Standing { color, score, rank });
        }

        Self { standings }
    }

    /// All standings, best first.
    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Colors sharing the best score.
    #[must_use]
    pub fn winners(&self) -> Vec<Color> {
        self.standings
            .iter()
            .filter(|s| s.rank == 1)
            .map(|s| s.color)
            .collect()
    }

    /// Check if a color won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.rank(color) == Some(1)
    }

    /// Whether more than one color shares first place.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners().len() > 1
    }

    #[must_use]
    pub fn rank(&self, color: Color) -> Option<u8> {
        self.standings.iter().find(|s| s.color == color).map(|s| s.rank)
    }

    #[must_use]
    pub fn score(&self, color: Color) -> Option<i32> {
        self.standings.iter().find(|s| s.color == color).map(|s| s.score)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `possible_moves`: lazy, so callers with a deadline can stop early
/// - `perform_move`: must leave the state untouched on error
/// - `winning_condition`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal moves for the color to move, produced incrementally.
    fn possible_moves<'a>(&'a self, state: &'a GameState) -> Box<dyn Iterator<Item = Move> + 'a>;

    /// Check a move against the current state.
    fn is_valid_move(&self, state: &GameState, mv: &Move) -> bool;

    /// Apply a move, advancing the turn.
    fn perform_move(&self, state: &mut GameState, mv: &Move) -> Result<(), RulesError>;

    /// Check if the game is over.
    fn winning_condition(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Collect every legal move.
    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.possible_moves(state).collect()
    }
}

//! Candidate evaluation: scoring one (player, position) pair.
//!
//! # Scoring
//!
//! [`ExposureEvaluator`] scores a candidate as:
//!
//! ```text
//! score = 1000 / (season_count + 1)
//!       + 500    if the player's previous position this game is in the other group
//!       - 10000  if the player already played this position this game
//! ```
//!
//! The first term favours positions a player has rarely played over the season. The
//! second rewards moving between infield and outfield from one inning to the next. The
//! third all but rules out repeating a position within a game.

use std::fmt;

use dugout_engine::Position;

/// A (player, position) pair under consideration, with the history needed to score it.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub player: &'a str,
    pub position: Position,
    /// Lifetime innings `player` has played at `position`.
    pub season_count: u32,
    /// Position `player` took in the most recent inning they fielded this game.
    pub previous_position: Option<Position>,
    /// Whether `player` has already fielded `position` this game.
    pub played_this_game: bool,
}

/// Assigns a score to an admissible candidate (higher is better).
pub trait CandidateEvaluator: fmt::Debug {
    fn evaluate_candidate(&self, candidate: &Candidate<'_>) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureEvaluator {
    pub exposure_weight: f64,
    pub variety_bonus: f64,
    pub repeat_penalty: f64,
}

impl Default for ExposureEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExposureEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exposure_weight: 1000.0,
            variety_bonus: 500.0,
            repeat_penalty: 10000.0,
        }
    }
}

impl CandidateEvaluator for ExposureEvaluator {
    fn evaluate_candidate(&self, candidate: &Candidate<'_>) -> f64 {
        let mut score = self.exposure_weight / (f64::from(candidate.season_count) + 1.0);
        if let Some(previous) = candidate.previous_position
            && previous.group() != candidate.position.group()
        {
            score += self.variety_bonus;
        }
        if candidate.played_this_game {
            score -= self.repeat_penalty;
        }
        score
    }
}

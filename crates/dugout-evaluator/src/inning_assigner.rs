//! Inning assignment: choosing the field and filling every position for one inning.
//!
//! # How It Works
//!
//! 1. **Select Field** - Shuffle the present players and take the first nine; the rest
//!    sit on the bench (in game-roster order)
//! 2. **Enumerate Pairs** - Every remaining fielded player × every open position
//! 3. **Filter** - Skip pairs that break pitcher eligibility
//! 4. **Score and Commit** - Commit the highest-scoring pair (first one wins ties) and
//!    repeat until all nine positions are filled
//!
//! # Pitcher Eligibility
//!
//! Only players flagged as pitchers on the roster may be placed at `Pitcher`. Two rules keep
//! the greedy fill from stranding that position:
//!
//! - If the first nine shuffled players include no eligible pitcher but the bench does, the
//!   first eligible bench player swaps in for the last fielded player.
//! - While `Pitcher` is open, the last eligible player still unassigned may only be placed
//!   at `Pitcher`.
//!
//! When no present player is eligible at all, no admissible pair exists for `Pitcher`. The
//! assigner then places the first remaining player at the first remaining position and logs
//! an error; the inning is still completed.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use dugout_engine::{
    GameRoster, InningAssignment, PlayerGameHistory, Position, Roster, SeasonStats,
};
use rand::{Rng, seq::SliceRandom};

use crate::candidate_evaluator::{Candidate, CandidateEvaluator};

/// Read-only state a candidate is scored against.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentContext<'a> {
    pub roster: &'a Roster,
    pub season_stats: &'a SeasonStats,
    pub game_history: &'a PlayerGameHistory,
}

/// The nine players taking the field for an inning, and everyone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub fielded: ArrayVec<String, { Position::LEN }>,
    pub bench: Vec<String>,
}

/// The pair chosen by [`InningAssigner::select_best_candidate`], by index into its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePick {
    pub player_index: usize,
    pub position_index: usize,
    pub score: f64,
}

#[derive(Debug)]
pub struct InningAssigner<'a> {
    candidate_evaluator: Box<dyn CandidateEvaluator + 'a>,
}

impl<'a> InningAssigner<'a> {
    #[must_use]
    pub fn new(candidate_evaluator: Box<dyn CandidateEvaluator + 'a>) -> Self {
        Self {
            candidate_evaluator,
        }
    }

    /// Randomly picks nine players to take the field.
    ///
    /// Selection is independent from inning to inning; nothing balances bench time.
    pub fn select_field<R>(game: &GameRoster, roster: &Roster, rng: &mut R) -> FieldSelection
    where
        R: Rng + ?Sized,
    {
        let mut shuffled = game.players().to_vec();
        shuffled.shuffle(rng);

        let (fielded, rest) = shuffled.split_at_mut(Position::LEN);
        if !fielded.iter().any(|name| roster.is_pitcher(name))
            && let Some(index) = rest.iter().position(|name| roster.is_pitcher(name))
        {
            std::mem::swap(&mut fielded[Position::LEN - 1], &mut rest[index]);
        }

        let fielded: ArrayVec<String, { Position::LEN }> =
            shuffled.into_iter().take(Position::LEN).collect();
        let bench = game
            .players()
            .iter()
            .filter(|name| !fielded.contains(*name))
            .cloned()
            .collect();
        FieldSelection { fielded, bench }
    }

    /// Finds the highest-scoring admissible (player, position) pair.
    ///
    /// Pairs are enumerated player-major in the given order; the first pair reaching the
    /// maximum score wins.
    ///
    /// # Returns
    ///
    /// `None` if no admissible pair exists
    #[must_use]
    pub fn select_best_candidate(
        &self,
        players: &[&str],
        positions: &[Position],
        context: &AssignmentContext<'_>,
    ) -> Option<CandidatePick> {
        let pitcher_open = positions.contains(&Position::Pitcher);
        let eligible_pitchers = players
            .iter()
            .filter(|name| context.roster.is_pitcher(name))
            .count();

        let mut best: Option<CandidatePick> = None;
        for (player_index, &player) in players.iter().enumerate() {
            let is_pitcher = context.roster.is_pitcher(player);
            let reserved = pitcher_open && is_pitcher && eligible_pitchers == 1;
            for (position_index, &position) in positions.iter().enumerate() {
                let admissible = if position == Position::Pitcher {
                    is_pitcher
                } else {
                    !reserved
                };
                if !admissible {
                    continue;
                }
                let candidate = Candidate {
                    player,
                    position,
                    season_count: context.season_stats.count(player, position),
                    previous_position: context.game_history.last_position(player),
                    played_this_game: context.game_history.has_played(player, position),
                };
                let score = self.candidate_evaluator.evaluate_candidate(&candidate);
                if best.is_none_or(|best| score > best.score) {
                    best = Some(CandidatePick {
                        player_index,
                        position_index,
                        score,
                    });
                }
            }
        }
        best
    }

    /// Fills all nine positions with the fielded players.
    ///
    /// # Panics
    ///
    /// Panics if `selection.fielded` does not hold exactly nine players.
    #[must_use]
    pub fn assign_inning(
        &self,
        inning: u32,
        selection: FieldSelection,
        context: &AssignmentContext<'_>,
    ) -> InningAssignment {
        assert_eq!(selection.fielded.len(), Position::LEN);

        let mut players: ArrayVec<&str, { Position::LEN }> =
            selection.fielded.iter().map(String::as_str).collect();
        let mut positions: ArrayVec<Position, { Position::LEN }> =
            Position::ALL.into_iter().collect();
        let mut assigned = BTreeMap::new();

        while !positions.is_empty() {
            let (player_index, position_index) =
                match self.select_best_candidate(&players, &positions, context) {
                    Some(pick) => {
                        tracing::debug!(
                            inning,
                            player = players[pick.player_index],
                            position = %positions[pick.position_index],
                            score = pick.score,
                            "assigned position"
                        );
                        (pick.player_index, pick.position_index)
                    }
                    None => {
                        tracing::error!(
                            inning,
                            player = players[0],
                            position = %positions[0],
                            "no admissible assignment, placing first remaining player"
                        );
                        (0, 0)
                    }
                };
            let player = players.remove(player_index);
            let position = positions.remove(position_index);
            assigned.insert(position, player.to_owned());
        }

        InningAssignment::new(inning, assigned, selection.bench)
    }
}

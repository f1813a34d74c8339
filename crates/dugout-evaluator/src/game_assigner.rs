//! Game assignment: position tables for every inning of a game.
//!
//! Each inning is assigned independently by the [`InningAssigner`], except for one piece
//! of shared state: a fresh [`PlayerGameHistory`] that records every finished inning, so
//! later innings see which positions each player has already taken.

use dugout_engine::{GameRoster, InningAssignment, PlayerGameHistory, Roster, SeasonStats};
use rand::Rng;

use crate::{
    candidate_evaluator::ExposureEvaluator,
    inning_assigner::{AssignmentContext, InningAssigner},
};

/// Number of innings in a game.
pub const INNINGS: u32 = 3;

#[derive(Debug)]
pub struct GameAssigner<'a> {
    inning_assigner: InningAssigner<'a>,
}

impl Default for GameAssigner<'_> {
    fn default() -> Self {
        Self::new(InningAssigner::new(Box::new(ExposureEvaluator::new())))
    }
}

impl<'a> GameAssigner<'a> {
    #[must_use]
    pub fn new(inning_assigner: InningAssigner<'a>) -> Self {
        Self { inning_assigner }
    }

    /// Generates the position table for each of the [`INNINGS`] innings.
    ///
    /// # Arguments
    ///
    /// * `game` - Players present for this game
    /// * `roster` - Source of pitcher eligibility
    /// * `season_stats` - Lifetime counts biasing players toward less-played positions
    /// * `rng` - Random source for field selection
    pub fn generate_assignments<R>(
        &self,
        game: &GameRoster,
        roster: &Roster,
        season_stats: &SeasonStats,
        rng: &mut R,
    ) -> Vec<InningAssignment>
    where
        R: Rng + ?Sized,
    {
        let mut game_history = PlayerGameHistory::new();
        let mut innings = Vec::with_capacity(INNINGS as usize);
        for inning in 1..=INNINGS {
            let selection = InningAssigner::select_field(game, roster, rng);
            let context = AssignmentContext {
                roster,
                season_stats,
                game_history: &game_history,
            };
            let assignment = self
                .inning_assigner
                .assign_inning(inning, selection, &context);
            game_history.record_inning(&assignment);
            innings.push(assignment);
        }
        innings
    }
}

#[cfg(test)]
mod tests {
    use dugout_engine::{LineupSeed, Player, Position};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn team(pitchers: &[&str], others: usize) -> (Roster, GameRoster) {
        let players: Vec<_> = pitchers
            .iter()
            .map(|name| Player::pitcher(*name))
            .chain((0..others).map(|i| Player::new(format!("Player {i}"))))
            .collect();
        let roster = Roster::from_players(players).unwrap();
        let game = GameRoster::new(roster.names().map(str::to_owned)).unwrap();
        (roster, game)
    }

    fn generate(roster: &Roster, game: &GameRoster, seed: u64) -> Vec<InningAssignment> {
        let mut rng = Pcg32::seed_from_u64(seed);
        GameAssigner::default().generate_assignments(game, roster, &SeasonStats::new(), &mut rng)
    }

    #[test]
    fn test_every_inning_fills_every_position_once() {
        let (roster, game) = team(&["Sam", "Pat"], 11);
        for seed in 0..50 {
            let innings = generate(&roster, &game, seed);
            assert_eq!(innings.len(), 3);
            for (i, inning) in innings.iter().enumerate() {
                assert_eq!(inning.inning() as usize, i + 1);
                assert!(inning.is_complete(), "seed {seed}");

                let mut fielded: Vec<_> = inning.positions().map(|(_, name)| name).collect();
                fielded.sort_unstable();
                fielded.dedup();
                assert_eq!(fielded.len(), Position::LEN, "player fielded twice");

                for name in game.players() {
                    let assigned = inning.position_of(name).is_some();
                    let benched = inning.is_benched(name);
                    assert!(assigned != benched, "seed {seed}: {name}");
                }
            }
        }
    }

    #[test]
    fn test_lone_pitcher_pitches_every_inning() {
        let (roster, game) = team(&["Sam"], 9);
        for seed in 0..100 {
            for inning in generate(&roster, &game, seed) {
                assert_eq!(
                    inning.player_at(Position::Pitcher),
                    Some("Sam"),
                    "seed {seed}, inning {}",
                    inning.inning()
                );
            }
        }
    }

    #[test]
    fn test_non_pitcher_never_pitches_when_pitchers_present() {
        let (roster, game) = team(&["Sam", "Pat", "Lee"], 10);
        for seed in 0..100 {
            for inning in generate(&roster, &game, seed) {
                let pitcher = inning.player_at(Position::Pitcher).unwrap();
                assert!(roster.is_pitcher(pitcher), "seed {seed}: {pitcher}");
            }
        }
    }

    #[test]
    fn test_no_eligible_pitcher_still_completes() {
        let (roster, game) = team(&[], 10);
        for inning in generate(&roster, &game, 5) {
            assert!(inning.is_complete());
            assert!(inning.player_at(Position::Pitcher).is_some());
        }
    }

    #[test]
    fn test_same_seed_same_lineup() {
        let (roster, game) = team(&["Sam"], 12);
        let seed = LineupSeed::from_bytes([0x5A; 16]);
        let assigner = GameAssigner::default();
        let stats = SeasonStats::new();
        let a = assigner.generate_assignments(&game, &roster, &stats, &mut seed.rng());
        let b = assigner.generate_assignments(&game, &roster, &stats, &mut seed.rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_season_stats_steer_toward_new_positions() {
        // Nine players, each with a long history at every position but one.
        let (roster, game) = team(&[], 9);
        let names: Vec<_> = game.players().to_vec();
        let mut stats = SeasonStats::new();
        for (i, name) in names.iter().enumerate() {
            for pos in Position::ALL {
                if pos.index() != i {
                    stats.increment(name, pos, 20);
                }
            }
        }
        // Player i has never played position i, so the first inning is forced.
        let mut rng = Pcg32::seed_from_u64(1);
        let innings = GameAssigner::default().generate_assignments(&game, &roster, &stats, &mut rng);
        for (i, name) in names.iter().enumerate() {
            if Position::ALL[i] == Position::Pitcher {
                continue;
            }
            assert_eq!(innings[0].position_of(name), Some(Position::ALL[i]), "{name}");
        }
    }
}

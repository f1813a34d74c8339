//! Position assignment: choosing who plays where in every inning of a game.
//!
//! This crate implements a three-level architecture:
//!
//! 1. **Candidate Evaluation** ([`candidate_evaluator`]) - Scores a single (player, position)
//!    pair from season exposure and the player's positions earlier in the game.
//!
//! 2. **Inning Assignment** ([`inning_assigner`]) - Picks nine players for the field and fills
//!    the nine positions greedily, always committing the highest-scoring admissible pair.
//!
//! 3. **Game Assignment** ([`game_assigner`]) - Runs inning assignment for every inning,
//!    carrying each player's in-game position history forward.
//!
//! # Architecture
//!
//! ```text
//! Game Assignment (innings, history)
//!     ↓ uses
//! Inning Assignment (field selection, greedy fill)
//!     ↓ uses
//! Candidate Evaluation (score one pair)
//! ```
//!
//! # Design Principles
//!
//! ## Hard Constraints Are Not Scores
//!
//! Pitcher eligibility is checked by the inning assigner before a pair is scored. An
//! ineligible pair is skipped, never just scored low. The repeat penalty, in contrast, is
//! a score: a repeated position is still chosen when nothing else is left.
//!
//! ## Greedy, Not Optimal
//!
//! Each step commits the single best pair. This is fast and predictable but can paint
//! itself into a corner; the inning assigner therefore reserves the last available
//! pitcher-eligible player for `Pitcher`, and falls back to the first remaining player
//! and position (logged as an error) if no admissible pair exists at all.
//!
//! # Example
//!
//! ```
//! use dugout_engine::{GameRoster, LineupSeed, Player, Roster, SeasonStats};
//! use dugout_evaluator::game_assigner::GameAssigner;
//!
//! let mut players: Vec<_> = (1..=9).map(|i| Player::new(format!("Player {i}"))).collect();
//! players.push(Player::pitcher("Sam"));
//! let roster = Roster::from_players(players).unwrap();
//! let game = GameRoster::new(roster.names().map(str::to_owned)).unwrap();
//!
//! let mut rng = LineupSeed::from_bytes([7; 16]).rng();
//! let innings =
//!     GameAssigner::default().generate_assignments(&game, &roster, &SeasonStats::new(), &mut rng);
//!
//! assert_eq!(innings.len(), 3);
//! assert!(innings.iter().all(|inning| inning.is_complete()));
//! ```

pub mod candidate_evaluator;
pub mod game_assigner;
pub mod inning_assigner;

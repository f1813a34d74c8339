//! Per-game state: who is present, who plays where, and who bats next.
//!
//! - [`GameRoster`] - Players present for one game (at least one per position)
//! - [`InningAssignment`] - Position table and bench for a single inning
//! - [`PlayerGameHistory`] - Positions each player has taken so far this game
//! - [`BattingOrder`] - Cyclic batting order
//! - [`LineupSeed`] - Seed for deterministic lineup generation
//!
//! # Game Flow
//!
//! 1. Select present players into a [`GameRoster`] (rejected if too few)
//! 2. Optionally shuffle a [`BattingOrder`] from it
//! 3. Generate one [`InningAssignment`] per inning with the assignment engine,
//!    recording each finished inning into a [`PlayerGameHistory`]
//! 4. Advance the batting order as the game proceeds
//! 5. Commit the assignments into [`SeasonStats`](crate::SeasonStats)

pub use self::{
    batting_order::*, game_history::*, game_roster::*, inning_assignment::*, lineup_seed::*,
};

mod batting_order;
mod game_history;
mod game_roster;
mod inning_assignment;
mod lineup_seed;

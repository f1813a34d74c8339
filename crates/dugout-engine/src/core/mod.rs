//! Core data structures for roster and season bookkeeping.
//!
//! - [`Position`] / [`PositionGroup`] - The fixed nine defensive positions and their partition
//! - [`Player`] / [`Roster`] - Player identities and pitcher eligibility
//! - [`SeasonStats`] - Lifetime play counts per player and position
//! - [`ManualEntry`] - Operator-entered stat increments
//!
//! These types know nothing about randomness or lineup generation; they are the
//! records the assignment engine reads from and the stats committer writes into.

pub use self::{player::*, position::*, roster::*, season_stats::*};

mod player;
mod position;
mod roster;
mod season_stats;

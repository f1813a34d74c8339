use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Fielding positions and bench for one inning.
///
/// A player appears at most once: either at a single position or on the bench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningAssignment {
    inning: u32,
    positions: BTreeMap<Position, String>,
    bench: Vec<String>,
}

impl InningAssignment {
    /// Creates an inning record; `inning` is 1-based.
    #[must_use]
    pub fn new(inning: u32, positions: BTreeMap<Position, String>, bench: Vec<String>) -> Self {
        Self {
            inning,
            positions,
            bench,
        }
    }

    #[must_use]
    pub fn inning(&self) -> u32 {
        self.inning
    }

    /// Iterates over filled positions in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.positions
            .iter()
            .map(|(pos, player)| (*pos, player.as_str()))
    }

    #[must_use]
    pub fn player_at(&self, position: Position) -> Option<&str> {
        self.positions.get(&position).map(String::as_str)
    }

    #[must_use]
    pub fn position_of(&self, player: &str) -> Option<Position> {
        self.positions
            .iter()
            .find_map(|(pos, name)| (name == player).then_some(*pos))
    }

    #[must_use]
    pub fn bench(&self) -> &[String] {
        &self.bench
    }

    #[must_use]
    pub fn is_benched(&self, player: &str) -> bool {
        self.bench.iter().any(|name| name == player)
    }

    /// Returns whether every one of the nine positions has a player.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positions.len() == Position::LEN
    }
}

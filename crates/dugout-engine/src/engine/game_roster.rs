use serde::{Deserialize, Serialize};

use crate::{InsufficientPlayersError, core::Position};

/// The players present for one game, in selection order.
///
/// Holding a `GameRoster` proves there are enough distinct players to fill every
/// position, so lineup generation never has to check again.
///
/// # Example
///
/// ```
/// use dugout_engine::GameRoster;
///
/// let names = (1..=9).map(|i| format!("Player {i}"));
/// let game = GameRoster::new(names).unwrap();
/// assert_eq!(game.len(), 9);
///
/// assert!(GameRoster::new(["Solo".to_owned()]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GameRoster {
    players: Vec<String>,
}

impl GameRoster {
    /// Minimum number of present players (one per position).
    pub const MIN_PLAYERS: usize = Position::LEN;

    /// Collects present players, dropping repeated names (first occurrence wins).
    pub fn new<I>(players: I) -> Result<Self, InsufficientPlayersError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in players {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.len() < Self::MIN_PLAYERS {
            return Err(InsufficientPlayersError {
                present: unique.len(),
                required: Self::MIN_PLAYERS,
            });
        }
        Ok(Self { players: unique })
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }
}

impl TryFrom<Vec<String>> for GameRoster {
    type Error = InsufficientPlayersError;

    fn try_from(players: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(players)
    }
}

impl From<GameRoster> for Vec<String> {
    fn from(roster: GameRoster) -> Self {
        roster.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_rejects_fewer_than_nine() {
        let err = GameRoster::new(names(8)).unwrap_err();
        assert_eq!(
            err,
            InsufficientPlayersError {
                present: 8,
                required: 9
            }
        );
        assert!(err.to_string().contains("need 9"));
    }

    #[test]
    fn test_duplicates_do_not_count() {
        let mut players = names(8);
        players.push("P0".to_owned());
        assert!(GameRoster::new(players).is_err());

        let mut players = names(9);
        players.insert(3, "P0".to_owned());
        let game = GameRoster::new(players).unwrap();
        assert_eq!(game.players(), names(9));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = serde_json::to_string(&names(3)).unwrap();
        assert!(serde_json::from_str::<GameRoster>(&json).is_err());
        let json = serde_json::to_string(&names(10)).unwrap();
        let game: GameRoster = serde_json::from_str(&json).unwrap();
        assert_eq!(game.len(), 10);
        assert!(game.contains("P9"));
    }
}
